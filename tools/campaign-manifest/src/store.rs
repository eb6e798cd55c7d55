use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::StorageConfig,
    error::ManifestError,
    manifest::{content_hash, Manifest},
};

pub const CONTENT_TYPE: &str = "application/json";
pub const CACHE_CONTROL: &str = "no-store";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
    #[serde(rename = "Cache-Control")]
    pub cache_control: String,
}

impl ObjectMetadata {
    pub fn manifest() -> Self {
        Self {
            content_type: CONTENT_TYPE.to_string(),
            cache_control: CACHE_CONTROL.to_string(),
        }
    }
}

/// Minimal bucket/key object storage.
pub trait ObjectStore {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, ManifestError>;

    fn put_object(
        &mut self,
        bucket: &str,
        key: &str,
        content: &[u8],
        metadata: &ObjectMetadata,
    ) -> Result<(), ManifestError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content: Vec<u8>,
    pub metadata: ObjectMetadata,
}

#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    buckets: HashSet<String>,
    objects: HashMap<(String, String), StoredObject>,
}

impl MemoryObjectStore {
    pub fn with_bucket(bucket: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.buckets.insert(bucket.into());
        store
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<&StoredObject> {
        self.objects.get(&(bucket.to_string(), key.to_string()))
    }
}

impl ObjectStore for MemoryObjectStore {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, ManifestError> {
        Ok(self.buckets.contains(bucket))
    }

    fn put_object(
        &mut self,
        bucket: &str,
        key: &str,
        content: &[u8],
        metadata: &ObjectMetadata,
    ) -> Result<(), ManifestError> {
        if !self.buckets.contains(bucket) {
            return Err(ManifestError::BucketNotFound(bucket.to_string()));
        }
        self.objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                content: content.to_vec(),
                metadata: metadata.clone(),
            },
        );
        Ok(())
    }
}

/// Buckets are directories under `root`. Metadata is kept next to each
/// object as `<key>.meta.json`.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.root.join(bucket).join(key)
    }
}

impl ObjectStore for FsObjectStore {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, ManifestError> {
        Ok(self.root.join(bucket).is_dir())
    }

    fn put_object(
        &mut self,
        bucket: &str,
        key: &str,
        content: &[u8],
        metadata: &ObjectMetadata,
    ) -> Result<(), ManifestError> {
        let path = self.object_path(bucket, key);
        fs::write(&path, content)?;
        fs::write(
            path.with_file_name(format!("{key}.meta.json")),
            serde_json::to_vec(metadata)?,
        )?;
        Ok(())
    }
}

/// Location of an uploaded manifest, as stored in campaign data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedManifest {
    pub url: String,
    pub hash: String,
}

/// Content-addressed manifest storage.
pub trait ManifestStore {
    fn upload(&mut self, manifest: &Manifest) -> Result<UploadedManifest, ManifestError>;
}

/// `ManifestStore` over a bucket of an `ObjectStore`.
pub struct ManifestUploader<S> {
    store: S,
    config: StorageConfig,
}

impl<S: ObjectStore> ManifestUploader<S> {
    pub fn new(store: S, config: StorageConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ObjectStore> ManifestStore for ManifestUploader<S> {
    fn upload(&mut self, manifest: &Manifest) -> Result<UploadedManifest, ManifestError> {
        let bucket = &self.config.bucket;
        if !self.store.bucket_exists(bucket)? {
            return Err(ManifestError::BucketNotFound(bucket.clone()));
        }

        let content = manifest.to_json()?;
        let hash = content_hash(content.as_bytes());
        let key = format!("s3{hash}.json");
        debug!(%bucket, %key, size = content.len(), "uploading manifest");

        self.store
            .put_object(bucket, &key, content.as_bytes(), &ObjectMetadata::manifest())
            .map_err(|err| ManifestError::Upload(err.to_string()))?;

        let url = self.config.object_url(&key);
        info!(%url, %hash, "manifest uploaded");
        Ok(UploadedManifest { url, hash })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bucket: &str) -> StorageConfig {
        StorageConfig {
            endpoint: "localhost".to_string(),
            port: 9000,
            access_key: String::new(),
            secret_key: String::new(),
            use_ssl: false,
            bucket: bucket.to_string(),
        }
    }

    fn manifest() -> Manifest {
        Manifest::market_making(1, "requester", "mexc", "HUSD", 1, 100, 50)
    }

    #[test]
    fn test_upload_to_memory_store() {
        let mut uploader =
            ManifestUploader::new(MemoryObjectStore::with_bucket("manifests"), config("manifests"));
        let manifest = manifest();

        let uploaded = uploader.upload(&manifest).unwrap();
        let body = manifest.to_json().unwrap();
        assert_eq!(uploaded.hash, content_hash(body.as_bytes()));
        assert_eq!(
            uploaded.url,
            format!("http://localhost:9000/manifests/s3{}.json", uploaded.hash)
        );

        let key = format!("s3{}.json", uploaded.hash);
        let object = uploader.store().get("manifests", &key).unwrap();
        assert_eq!(object.content, body.as_bytes());
        assert_eq!(object.metadata.content_type, "application/json");
        assert_eq!(object.metadata.cache_control, "no-store");
    }

    #[test]
    fn test_identical_manifests_share_a_key() {
        let mut uploader =
            ManifestUploader::new(MemoryObjectStore::with_bucket("manifests"), config("manifests"));

        let first = uploader.upload(&manifest()).unwrap();
        let second = uploader.upload(&manifest()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_bucket() {
        let mut uploader =
            ManifestUploader::new(MemoryObjectStore::with_bucket("other"), config("manifests"));

        let err = uploader.upload(&manifest()).unwrap_err();
        assert!(matches!(err, ManifestError::BucketNotFound(ref bucket) if bucket == "manifests"));
        assert_eq!(err.to_string(), "Bucket manifests does not exist");
    }

    #[test]
    fn test_upload_to_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("manifests")).unwrap();
        let mut uploader =
            ManifestUploader::new(FsObjectStore::new(dir.path()), config("manifests"));

        let uploaded = uploader.upload(&manifest()).unwrap();
        let key = format!("s3{}.json", uploaded.hash);
        let path = uploader.store().object_path("manifests", &key);

        let stored: Manifest = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(stored, manifest());

        let metadata: ObjectMetadata = serde_json::from_slice(
            &fs::read(path.with_file_name(format!("{key}.meta.json"))).unwrap(),
        )
        .unwrap();
        assert_eq!(metadata, ObjectMetadata::manifest());
    }

    #[test]
    fn test_filesystem_bucket_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let mut uploader =
            ManifestUploader::new(FsObjectStore::new(dir.path()), config("manifests"));

        assert!(matches!(
            uploader.upload(&manifest()),
            Err(ManifestError::BucketNotFound(_))
        ));
    }
}
