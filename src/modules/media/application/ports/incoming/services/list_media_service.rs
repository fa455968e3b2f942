use std::sync::Arc;

use async_trait::async_trait;

use crate::media::application::{
    domain::{entities::MediaRecord, policies::MediaPolicy},
    ports::{
        incoming::use_cases::{ListMediaUseCase, MediaError},
        outgoing::db::MediaCatalog,
    },
};

pub struct ListMediaService<C>
where
    C: MediaCatalog,
{
    catalog: Arc<C>,
    policy: MediaPolicy,
}

impl<C> ListMediaService<C>
where
    C: MediaCatalog,
{
    pub fn new(catalog: Arc<C>, policy: MediaPolicy) -> Self {
        Self { catalog, policy }
    }
}

#[async_trait]
impl<C> ListMediaUseCase for ListMediaService<C>
where
    C: MediaCatalog,
{
    async fn execute(&self, product_id: &str) -> Result<Vec<MediaRecord>, MediaError> {
        let records = self.catalog.find_by_product(product_id).await?;

        if records.is_empty() && self.policy.empty_list_is_not_found {
            return Err(MediaError::product_media_not_found(product_id));
        }

        Ok(records)
    }
}
