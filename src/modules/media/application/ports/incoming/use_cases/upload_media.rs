use async_trait::async_trait;
use bytes::Bytes;

use crate::media::application::{
    domain::entities::MediaRecord, ports::incoming::use_cases::MediaError,
};

#[derive(Debug, Clone)]
pub struct UploadMediaCommand {
    pub product_id: String,
    /// Client supplied file name, only used to pick the stored extension.
    pub original_file_name: Option<String>,
    pub content_type: String,
    pub data: Bytes,
    pub is_thumbnail: bool,
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn execute(&self, command: UploadMediaCommand) -> Result<MediaRecord, MediaError>;
}
