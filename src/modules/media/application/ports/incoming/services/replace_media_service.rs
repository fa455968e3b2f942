use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::media::application::{
    domain::{
        entities::{make_storage_file_name, MediaRecord},
        policies::MediaPolicy,
    },
    ports::{
        incoming::{
            services::storage_ops::{check_size, classify_content, remove_best_effort, store_within},
            use_cases::{MediaError, ReplaceMediaCommand, ReplaceMediaUseCase, ReplaceOutcome},
        },
        outgoing::{
            blob_storage::{BlobStore, PutBlob},
            db::{CatalogError, CatalogTx, MediaCatalog},
        },
    },
};

pub struct ReplaceMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    catalog: Arc<C>,
    store: Arc<S>,
    policy: MediaPolicy,
}

impl<C, S> ReplaceMediaService<C, S>
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

    async fn update_row(
        &self,
        media_id: Uuid,
        file_name: &str,
        file_url: &str,
    ) -> Result<MediaRecord, CatalogError> {
        let mut tx = self.catalog.begin().await?;

        let updated = match tx.update_file(media_id, file_name, file_url).await {
            Ok(r) => r,
            Err(e) => {
                let _ = tx.rollback().await;
                return Err(e);
            }
        };

        tx.commit().await?;
        Ok(updated)
    }
}

#[async_trait]
impl<C, S> ReplaceMediaUseCase for ReplaceMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    async fn execute(&self, command: ReplaceMediaCommand) -> Result<ReplaceOutcome, MediaError> {
        let existing = self.catalog.find_by_id(command.media_id).await?;

        let file_type = classify_content(&self.policy, &command.content_type)?;
        if file_type != existing.file_type {
            return Err(MediaError::TypeMismatch {
                expected: existing.file_type,
                actual: file_type,
            });
        }

        check_size(&self.policy, command.data.len())?;

        let stored = store_within(
            self.store.as_ref(),
            self.policy.storage_timeout,
            PutBlob {
                file_name: make_storage_file_name(command.original_file_name.as_deref()),
                content_type: command.content_type.clone(),
                data: command.data,
            },
        )
        .await?;

        let mut warnings = Vec::new();
        if let Some(w) = remove_best_effort(
            self.store.as_ref(),
            self.policy.storage_timeout,
            &existing.file_url,
        )
        .await
        {
            warnings.push(w);
        }

        match self
            .update_row(existing.id, &stored.file_name, &stored.file_url)
            .await
        {
            Ok(record) => {
                info!(
                    media_id = %record.id,
                    product_id = %record.product_id,
                    warnings = warnings.len(),
                    "Media replaced"
                );
                Ok(ReplaceOutcome { record, warnings })
            }
            Err(e) => {
                error!(media_id = %existing.id, error = %e, "Updating replaced media failed");
                let _ = remove_best_effort(
                    self.store.as_ref(),
                    self.policy.storage_timeout,
                    &stored.file_url,
                )
                .await;
                Err(MediaError::StorageMetadataFailure(e.to_string()))
            }
        }
    }
}
