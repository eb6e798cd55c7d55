pub mod campaign_manager;
pub mod escrow;
pub mod human_usd;
pub mod stake;

pub use campaign_manager::*;
pub use escrow::*;
pub use human_usd::*;
pub use stake::*;
