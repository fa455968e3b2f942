use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::media::application::{
    domain::entities::CleanupWarning, ports::incoming::use_cases::MediaError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub media_id: Uuid,
    pub warnings: Vec<CleanupWarning>,
}

#[async_trait]
pub trait DeleteMediaUseCase: Send + Sync {
    async fn execute(&self, media_id: Uuid) -> Result<DeleteOutcome, MediaError>;
}
