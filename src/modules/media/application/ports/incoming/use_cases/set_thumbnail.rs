use async_trait::async_trait;
use uuid::Uuid;

use crate::media::application::{
    domain::entities::MediaRecord, ports::incoming::use_cases::MediaError,
};

/// Moves the product's thumbnail flag onto `media_id`.
#[async_trait]
pub trait SetThumbnailUseCase: Send + Sync {
    async fn execute(&self, media_id: Uuid) -> Result<MediaRecord, MediaError>;
}
