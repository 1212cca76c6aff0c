//! Object storage upload port
//!
//! The core is indifferent to the storage destination; it hands finished
//! artifacts to whatever implements this trait, addressed by a
//! namespace/bucket/prefix triple chosen at construction time.

/// Where an uploaded artifact ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedArtifact {
    /// Storage namespace
    pub namespace: String,
    /// Bucket name
    pub bucket: String,
    /// Full object name including any prefix
    pub object_name: String,
    /// Addressable location of the stored object
    pub uri: String,
}

/// Uploads report artifacts to an object store
pub trait ObjectStore: Send + Sync {
    /// Store one object under the configured namespace/bucket/prefix
    fn put(
        &self,
        object_name: &str,
        body: &[u8],
        content_type: &str,
    ) -> anyhow::Result<UploadedArtifact>;
}
