//! Campaign manifests for HumanUSD escrows.
//!
//! A manifest is serialised to JSON, content-addressed by its SHA-1 hex
//! digest and uploaded to an object store bucket. The returned url and hash
//! are what `set_campaign_data` and `mint_with_manifest` take on-chain.

pub mod config;
pub mod error;
pub mod manifest;
pub mod store;

pub use config::StorageConfig;
pub use error::ManifestError;
pub use manifest::{CampaignType, Manifest};
pub use store::{
    FsObjectStore, ManifestStore, ManifestUploader, MemoryObjectStore, ObjectMetadata, ObjectStore,
    UploadedManifest,
};
