use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::media::application::{
    domain::entities::MediaRecord,
    ports::{
        incoming::use_cases::{MediaError, SetThumbnailUseCase},
        outgoing::db::{CatalogError, CatalogTx, MediaCatalog},
    },
};

pub struct SetThumbnailService<C>
where
    C: MediaCatalog,
{
    catalog: Arc<C>,
}

impl<C> SetThumbnailService<C>
where
    C: MediaCatalog,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

/// Validation failures raised inside the transaction are carried out
/// separately from catalog failures so the caller sees the right kind.
enum SwapError {
    Rejected(MediaError),
    Catalog(CatalogError),
}

impl From<CatalogError> for SwapError {
    fn from(err: CatalogError) -> Self {
        SwapError::Catalog(err)
    }
}

async fn swap<T: CatalogTx>(tx: &mut T, media_id: Uuid) -> Result<MediaRecord, SwapError> {
    let target = tx.find_by_id(media_id).await?;

    if !target.file_type.can_be_thumbnail() {
        return Err(SwapError::Rejected(MediaError::InvalidThumbnailTarget));
    }
    if target.is_thumbnail {
        return Err(SwapError::Rejected(MediaError::AlreadyThumbnail));
    }

    tx.clear_thumbnail(&target.product_id).await?;
    tx.set_thumbnail_flag(media_id, true).await?;

    Ok(tx.find_by_id(media_id).await?)
}

#[async_trait]
impl<C> SetThumbnailUseCase for SetThumbnailService<C>
where
    C: MediaCatalog,
{
    async fn execute(&self, media_id: Uuid) -> Result<MediaRecord, MediaError> {
        let mut tx = self.catalog.begin().await?;

        let record = match swap(&mut tx, media_id).await {
            Ok(r) => r,
            Err(e) => {
                let _ = tx.rollback().await;
                return Err(match e {
                    SwapError::Rejected(err) => err,
                    SwapError::Catalog(err) => err.into(),
                });
            }
        };

        tx.commit().await?;

        info!(media_id = %record.id, product_id = %record.product_id, "Thumbnail changed");
        Ok(record)
    }
}
