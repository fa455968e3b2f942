use async_trait::async_trait;
use bytes::Bytes;

// ============================================================================
// Domain Types
// ============================================================================

/// Content handed to the object store.
#[derive(Debug, Clone)]
pub struct PutBlob {
    /// Proposed storage name (`<uuid><.ext>`). Backends may adjust it and
    /// report the final name in [`StoredBlob::file_name`].
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Where the object ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub file_name: String,
    pub file_url: String,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobStoreError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage location: {0}")]
    InvalidLocation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Port for the external object storage holding the binary content.
///
/// The `file_url` returned by [`BlobStore::put`] is the only handle the rest
/// of the system keeps, so [`BlobStore::delete`] is addressed by URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, blob: PutBlob) -> Result<StoredBlob, BlobStoreError>;

    async fn delete(&self, file_url: &str) -> Result<(), BlobStoreError>;
}
