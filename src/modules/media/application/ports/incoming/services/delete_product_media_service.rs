use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};
use uuid::Uuid;

use crate::media::application::{
    domain::policies::MediaPolicy,
    ports::{
        incoming::{
            services::storage_ops::remove_best_effort,
            use_cases::{BulkDeleteOutcome, DeleteProductMediaUseCase, FailedFile, MediaError},
        },
        outgoing::{
            blob_storage::BlobStore,
            db::{CatalogError, CatalogTx, MediaCatalog},
        },
    },
};

pub struct DeleteProductMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    catalog: Arc<C>,
    store: Arc<S>,
    policy: MediaPolicy,
}

impl<C, S> DeleteProductMediaService<C, S>
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

    /// Only the rows listed at the start of the request are removed; media
    /// uploaded meanwhile keeps both its row and its object.
    async fn delete_rows(&self, ids: &[Uuid]) -> Result<u64, CatalogError> {
        let mut tx = self.catalog.begin().await?;
        let removed = match tx.delete_many(ids).await {
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
impl<C, S> DeleteProductMediaUseCase for DeleteProductMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    async fn execute(&self, product_id: &str) -> Result<BulkDeleteOutcome, MediaError> {
        let records = self.catalog.find_by_product(product_id).await?;
        if records.is_empty() {
            return Err(MediaError::product_media_not_found(product_id));
        }

        // Each object is attempted on its own; one failure never blocks the rest.
        let attempts = join_all(records.iter().map(|record| async move {
            let warning = remove_best_effort(
                self.store.as_ref(),
                self.policy.storage_timeout,
                &record.file_url,
            )
            .await;
            (record, warning)
        }))
        .await;

        let errors: Vec<FailedFile> = attempts
            .into_iter()
            .filter_map(|(record, warning)| {
                warning.map(|w| FailedFile {
                    media_id: record.id,
                    file_url: w.file_url,
                    error: w.reason,
                })
            })
            .collect();

        let ids: Vec<Uuid> = records.iter().map(|r| r.id).collect();
        let deleted_db_entries = self
            .delete_rows(&ids)
            .await
            .map_err(|e| MediaError::StorageMetadataFailure(e.to_string()))?;

        let outcome = BulkDeleteOutcome {
            product_id: product_id.to_string(),
            records_found: records.len(),
            deleted_files: records.len() - errors.len(),
            failed_files: errors.len(),
            deleted_db_entries,
            errors,
        };

        if outcome.failed_files > 0 {
            warn!(
                product_id = %product_id,
                failed_files = outcome.failed_files,
                "Some product files could not be removed from storage"
            );
        }
        info!(
            product_id = %product_id,
            deleted_db_entries = outcome.deleted_db_entries,
            deleted_files = outcome.deleted_files,
            "Product media deleted"
        );

        Ok(outcome)
    }
}
