use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::media::application::ports::incoming::use_cases::MediaError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FailedFile {
    pub media_id: Uuid,
    pub file_url: String,
    pub error: String,
}

/// Rows are always removed, even when some objects could not be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BulkDeleteOutcome {
    pub product_id: String,
    pub records_found: usize,
    pub deleted_files: usize,
    pub failed_files: usize,
    pub deleted_db_entries: u64,
    pub errors: Vec<FailedFile>,
}

#[async_trait]
pub trait DeleteProductMediaUseCase: Send + Sync {
    async fn execute(&self, product_id: &str) -> Result<BulkDeleteOutcome, MediaError>;
}
