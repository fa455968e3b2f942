use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::media::application::{
    domain::policies::MediaPolicy,
    ports::{
        incoming::{
            services::storage_ops::remove_best_effort,
            use_cases::{DeleteMediaUseCase, DeleteOutcome, MediaError},
        },
        outgoing::{
            blob_storage::BlobStore,
            db::{CatalogError, CatalogTx, MediaCatalog},
        },
    },
};

pub struct DeleteMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    catalog: Arc<C>,
    store: Arc<S>,
    policy: MediaPolicy,
}

impl<C, S> DeleteMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    pub fn new(catalog: Arc<C>, store: Arc<S>, policy: MediaPolicy) -> Self {
        Self {
            catalog,
            store,
            policy,
        }
    }

    async fn delete_row(&self, media_id: Uuid) -> Result<u64, CatalogError> {
        let mut tx = self.catalog.begin().await?;
        let removed = match tx.delete(media_id).await {
            Ok(n) => n,
            Err(e) => {
                let _ = tx.rollback().await;
                return Err(e);
            }
        };
        tx.commit().await?;
        Ok(removed)
    }
}

#[async_trait]
impl<C, S> DeleteMediaUseCase for DeleteMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    async fn execute(&self, media_id: Uuid) -> Result<DeleteOutcome, MediaError> {
        let record = self.catalog.find_by_id(media_id).await?;

        let warnings = remove_best_effort(
            self.store.as_ref(),
            self.policy.storage_timeout,
            &record.file_url,
        )
        .await
        .into_iter()
        .collect::<Vec<_>>();

        self.delete_row(media_id)
            .await
            .map_err(|e| MediaError::StorageMetadataFailure(e.to_string()))?;

        info!(
            media_id = %media_id,
            product_id = %record.product_id,
            warnings = warnings.len(),
            "Media deleted"
        );

        Ok(DeleteOutcome { media_id, warnings })
    }
}
