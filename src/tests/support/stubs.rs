use async_trait::async_trait;
use uuid::Uuid;

use crate::media::application::domain::entities::MediaRecord;
use crate::media::application::ports::incoming::use_cases::{
    BulkDeleteOutcome, DeleteMediaUseCase, DeleteOutcome, DeleteProductMediaUseCase,
    GetThumbnailUseCase, ListMediaUseCase, MediaError, ReplaceMediaCommand, ReplaceMediaUseCase,
    ReplaceOutcome, SetThumbnailUseCase, UploadMediaCommand, UploadMediaUseCase,
};

/// Answers every media use case with the same error.
#[derive(Clone)]
pub struct FailingMediaUseCase(pub MediaError);

#[async_trait]
impl UploadMediaUseCase for FailingMediaUseCase {
    async fn execute(&self, _command: UploadMediaCommand) -> Result<MediaRecord, MediaError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl ReplaceMediaUseCase for FailingMediaUseCase {
    async fn execute(&self, _command: ReplaceMediaCommand) -> Result<ReplaceOutcome, MediaError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl SetThumbnailUseCase for FailingMediaUseCase {
    async fn execute(&self, _media_id: Uuid) -> Result<MediaRecord, MediaError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl GetThumbnailUseCase for FailingMediaUseCase {
    async fn execute(&self, _product_id: &str) -> Result<MediaRecord, MediaError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl DeleteMediaUseCase for FailingMediaUseCase {
    async fn execute(&self, _media_id: Uuid) -> Result<DeleteOutcome, MediaError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl DeleteProductMediaUseCase for FailingMediaUseCase {
    async fn execute(&self, _product_id: &str) -> Result<BulkDeleteOutcome, MediaError> {
        Err(self.0.clone())
    }
}

#[async_trait]
impl ListMediaUseCase for FailingMediaUseCase {
    async fn execute(&self, _product_id: &str) -> Result<Vec<MediaRecord>, MediaError> {
        Err(self.0.clone())
    }
}
