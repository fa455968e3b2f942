use crate::media::application::{
    domain::entities::FileType, ports::outgoing::blob_storage::BlobStoreError,
    ports::outgoing::db::CatalogError,
};

/// Every failure a media operation can surface. `code()` is the stable,
/// machine readable discriminator sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Unsupported content type '{content_type}'. Allowed: {allowed}")]
    UnsupportedType {
        content_type: String,
        allowed: String,
    },

    #[error("Videos cannot be thumbnails")]
    InvalidThumbnailRequest,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    PayloadTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("File type must stay '{expected}', got '{actual}'")]
    TypeMismatch { expected: FileType, actual: FileType },

    #[error("Only images can be thumbnails")]
    InvalidThumbnailTarget,

    #[error("Media is already the thumbnail")]
    AlreadyThumbnail,

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageFailure(String),

    #[error("Metadata could not be saved after storage changed: {0}")]
    StorageMetadataFailure(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl MediaError {
    pub fn code(&self) -> &'static str {
        match self {
            MediaError::UnsupportedType { .. } => "UNSUPPORTED_TYPE",
            MediaError::InvalidThumbnailRequest => "INVALID_THUMBNAIL_REQUEST",
            MediaError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            MediaError::TypeMismatch { .. } => "TYPE_MISMATCH",
            MediaError::InvalidThumbnailTarget => "INVALID_THUMBNAIL_TARGET",
            MediaError::AlreadyThumbnail => "ALREADY_THUMBNAIL",
            MediaError::NotFound(_) => "NOT_FOUND",
            MediaError::StorageFailure(_) => "STORAGE_FAILURE",
            MediaError::StorageMetadataFailure(_) => "STORAGE_METADATA_FAILURE",
            MediaError::RepositoryError(_) => "REPOSITORY_ERROR",
        }
    }

    pub fn media_not_found() -> Self {
        MediaError::NotFound("Media not found".to_string())
    }

    pub fn product_media_not_found(product_id: &str) -> Self {
        MediaError::NotFound(format!("No media found for product {product_id}"))
    }

    pub fn thumbnail_not_found(product_id: &str) -> Self {
        MediaError::NotFound(format!("No thumbnail found for product {product_id}"))
    }
}

/// Catalog failures that happen before storage was touched.
impl From<CatalogError> for MediaError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => MediaError::media_not_found(),
            other => MediaError::RepositoryError(other.to_string()),
        }
    }
}

impl From<BlobStoreError> for MediaError {
    fn from(err: BlobStoreError) -> Self {
        MediaError::StorageFailure(err.to_string())
    }
}
