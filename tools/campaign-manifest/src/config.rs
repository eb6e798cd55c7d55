use crate::error::ManifestError;

pub const DEFAULT_PORT: u16 = 80;

/// Object store location manifests are uploaded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub endpoint: String,
    pub port: u16,
    /// Credentials for an S3-compatible backend. The in-memory and filesystem
    /// stores ignore them.
    pub access_key: String,
    pub secret_key: String,
    pub use_ssl: bool,
    pub bucket: String,
}

impl StorageConfig {
    /// Reads `S3_ENDPOINT`, `S3_PORT`, `S3_ACCESS_KEY`, `S3_SECRET_KEY`,
    /// `S3_USE_SSL` and `S3_BUCKET`.
    pub fn from_env() -> Result<Self, ManifestError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ManifestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ManifestError::MissingConfig(name))
        };

        let port = match lookup("S3_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ManifestError::InvalidConfig { name: "S3_PORT", value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            endpoint: required("S3_ENDPOINT")?,
            port,
            access_key: lookup("S3_ACCESS_KEY").unwrap_or_default(),
            secret_key: lookup("S3_SECRET_KEY").unwrap_or_default(),
            use_ssl: lookup("S3_USE_SSL").as_deref() == Some("true"),
            bucket: required("S3_BUCKET")?,
        })
    }

    pub fn object_url(&self, key: &str) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!(
            "{}://{}:{}/{}/{}",
            scheme, self.endpoint, self.port, self.bucket, key
        )
    }
}
