use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::media::application::ports::outgoing::blob_storage::{
    BlobStore, BlobStoreError, PutBlob, StoredBlob,
};

/// Path under which the service itself serves locally stored files.
pub const LOCAL_FILES_ROUTE: &str = "/media/files";

/// Flat directory of uploaded files, served back by the service.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    base_url: String,
}

impl LocalBlobStore {
    /// Creates `root` when missing.
    pub async fn new(
        root: impl Into<PathBuf>,
        base_url: impl Into<String>,
    ) -> Result<Self, BlobStoreError> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            BlobStoreError::Configuration(format!(
                "Failed to create upload directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(Self {
            root,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn url_prefix(&self) -> String {
        format!("{}{}/", self.base_url, LOCAL_FILES_ROUTE)
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}{}", self.url_prefix(), file_name)
    }

    /// Resolves a stored file name to its path. Anything that could leave
    /// the upload directory is refused.
    pub fn path_for(&self, file_name: &str) -> Result<PathBuf, BlobStoreError> {
        let valid = !file_name.is_empty()
            && !file_name.starts_with('.')
            && !file_name.contains("..")
            && file_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_');

        if !valid {
            return Err(BlobStoreError::InvalidLocation(file_name.to_string()));
        }

        Ok(self.root.join(file_name))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, blob: PutBlob) -> Result<StoredBlob, BlobStoreError> {
        let path = self.path_for(&blob.file_name)?;
        let size = blob.data.len();

        fs::write(&path, &blob.data).await.map_err(|e| {
            BlobStoreError::UploadFailed(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), size_bytes = size, "Local file stored");

        Ok(StoredBlob {
            file_url: self.url_for(&blob.file_name),
            file_name: blob.file_name,
        })
    }

    async fn delete(&self, file_url: &str) -> Result<(), BlobStoreError> {
        let file_name = file_url
            .strip_prefix(&self.url_prefix())
            .ok_or_else(|| BlobStoreError::InvalidLocation(file_url.to_string()))?;
        let path = self.path_for(file_name)?;

        fs::remove_file(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => BlobStoreError::NotFound(file_url.to_string()),
            _ => BlobStoreError::DeleteFailed(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            )),
        })
    }
}
