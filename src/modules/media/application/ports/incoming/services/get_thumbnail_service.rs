use std::sync::Arc;

use async_trait::async_trait;

use crate::media::application::{
    domain::entities::MediaRecord,
    ports::{
        incoming::use_cases::{GetThumbnailUseCase, MediaError},
        outgoing::db::{CatalogError, MediaCatalog},
    },
};

pub struct GetThumbnailService<C>
where
    C: MediaCatalog,
{
    catalog: Arc<C>,
}

impl<C> GetThumbnailService<C>
where
    C: MediaCatalog,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<C> GetThumbnailUseCase for GetThumbnailService<C>
where
    C: MediaCatalog,
{
    async fn execute(&self, product_id: &str) -> Result<MediaRecord, MediaError> {
        match self.catalog.find_thumbnail(product_id).await {
            Ok(record) => Ok(record),
            Err(CatalogError::NotFound) => Err(MediaError::thumbnail_not_found(product_id)),
            Err(e) => Err(e.into()),
        }
    }
}
