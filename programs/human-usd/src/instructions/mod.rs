#![allow(ambiguous_glob_reexports)]

pub mod add_campaign_tier;
pub mod get_campaign_tier_to_launch;
pub mod initialize_campaign_manager;
pub mod initialize_human_usd;
pub mod launch_accounts;
pub mod launch_pending_campaign;
pub mod mint_husd;
pub mod peek_campaign_tier_to_launch;
pub mod remove_campaign_tier;
pub mod set_campaign_data;
pub mod set_campaign_manager;
pub mod stake_hmt;

pub use add_campaign_tier::*;
pub use get_campaign_tier_to_launch::*;
pub use initialize_campaign_manager::*;
pub use initialize_human_usd::*;
pub use launch_accounts::*;
pub use launch_pending_campaign::*;
pub use mint_husd::*;
pub use peek_campaign_tier_to_launch::*;
pub use remove_campaign_tier::*;
pub use set_campaign_data::*;
pub use set_campaign_manager::*;
pub use stake_hmt::*;
