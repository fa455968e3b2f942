use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::media::application::{
    domain::entities::{CleanupWarning, MediaRecord},
    ports::incoming::use_cases::MediaError,
};

#[derive(Debug, Clone)]
pub struct ReplaceMediaCommand {
    pub media_id: Uuid,
    pub original_file_name: Option<String>,
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReplaceOutcome {
    pub record: MediaRecord,
    /// The previous object could not be removed.
    pub warnings: Vec<CleanupWarning>,
}

#[async_trait]
pub trait ReplaceMediaUseCase: Send + Sync {
    async fn execute(&self, command: ReplaceMediaCommand) -> Result<ReplaceOutcome, MediaError>;
}
