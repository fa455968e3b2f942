use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::media::application::{
    domain::{
        entities::{make_storage_file_name, MediaRecord, NewMediaRecord},
        policies::MediaPolicy,
    },
    ports::{
        incoming::{
            services::storage_ops::{check_size, classify_content, remove_best_effort, store_within},
            use_cases::{MediaError, UploadMediaCommand, UploadMediaUseCase},
        },
        outgoing::{
            blob_storage::{BlobStore, PutBlob},
            db::{CatalogError, CatalogTx, MediaCatalog},
        },
    },
};

pub struct UploadMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    catalog: Arc<C>,
    store: Arc<S>,
    policy: MediaPolicy,
}

impl<C, S> UploadMediaService<C, S>
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

    /// Inserts the row. A thumbnail upload first takes the flag away from
    /// the product's current holder, in the same transaction.
    async fn persist(&self, record: NewMediaRecord) -> Result<MediaRecord, CatalogError> {
        let mut tx = self.catalog.begin().await?;

        if record.is_thumbnail {
            if let Err(e) = tx.clear_thumbnail(&record.product_id).await {
                let _ = tx.rollback().await;
                return Err(e);
            }
        }

        let inserted = match tx.insert(record).await {
            Ok(r) => r,
            Err(e) => {
                let _ = tx.rollback().await;
                return Err(e);
            }
        };

        tx.commit().await?;
        Ok(inserted)
    }
}

#[async_trait]
impl<C, S> UploadMediaUseCase for UploadMediaService<C, S>
where
    C: MediaCatalog,
    S: BlobStore + ?Sized,
{
    async fn execute(&self, command: UploadMediaCommand) -> Result<MediaRecord, MediaError> {
        let file_type = classify_content(&self.policy, &command.content_type)?;

        if command.is_thumbnail && !file_type.can_be_thumbnail() {
            return Err(MediaError::InvalidThumbnailRequest);
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

        let new_record = NewMediaRecord::new(
            command.product_id,
            stored.file_name,
            stored.file_url.clone(),
            file_type,
            command.is_thumbnail,
        );

        match self.persist(new_record).await {
            Ok(record) => {
                info!(
                    media_id = %record.id,
                    product_id = %record.product_id,
                    file_type = %record.file_type,
                    is_thumbnail = record.is_thumbnail,
                    "Media uploaded"
                );
                Ok(record)
            }
            Err(e) => {
                error!(file_url = %stored.file_url, error = %e, "Saving media metadata failed");
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
