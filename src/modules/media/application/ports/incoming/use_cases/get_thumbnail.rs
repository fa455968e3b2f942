use async_trait::async_trait;

use crate::media::application::{
    domain::entities::MediaRecord, ports::incoming::use_cases::MediaError,
};

#[async_trait]
pub trait GetThumbnailUseCase: Send + Sync {
    async fn execute(&self, product_id: &str) -> Result<MediaRecord, MediaError>;
}
