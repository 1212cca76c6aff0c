//! Local filesystem object store
//!
//! Emulates an object store under a root directory: objects land at
//! `<root>/<namespace>/<bucket>/<object_name>`. Used for offline runs and
//! tests; a live object storage client implements the same port.

use std::fs;
use std::path::PathBuf;

use crate::core::ports::{ObjectStore, UploadedArtifact};

/// Object store writing to a local directory tree
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
    namespace: String,
    bucket: String,
    prefix: String,
}

impl LocalObjectStore {
    /// Create a store addressed by the namespace/bucket/prefix triple
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        namespace: impl Into<String>,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            namespace: namespace.into(),
            bucket: bucket.into(),
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    /// Full object name for a file name under this store's prefix
    #[must_use]
    pub fn object_name(&self, file_name: &str) -> String {
        if self.prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{file_name}", self.prefix)
        }
    }
}

impl ObjectStore for LocalObjectStore {
    fn put(
        &self,
        object_name: &str,
        body: &[u8],
        content_type: &str,
    ) -> anyhow::Result<UploadedArtifact> {
        let path = self.root.join(&self.namespace).join(&self.bucket).join(object_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;
        log::debug!("stored {object_name} ({content_type}) at {}", path.display());

        Ok(UploadedArtifact {
            namespace: self.namespace.clone(),
            bucket: self.bucket.clone(),
            object_name: object_name.to_string(),
            uri: path.display().to_string(),
        })
    }
}
