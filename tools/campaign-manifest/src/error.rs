use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Bucket {0} does not exist")]
    BucketNotFound(String),

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to upload manifest: {0}")]
    Upload(String),

    #[error("missing configuration variable {0}")]
    MissingConfig(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },
}
