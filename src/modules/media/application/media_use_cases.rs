use std::sync::Arc;

use crate::media::application::{
    domain::policies::MediaPolicy,
    ports::{
        incoming::{
            services::{
                DeleteMediaService, DeleteProductMediaService, GetThumbnailService,
                ListMediaService, ReplaceMediaService, SetThumbnailService, UploadMediaService,
            },
            use_cases::{
                DeleteMediaUseCase, DeleteProductMediaUseCase, GetThumbnailUseCase,
                ListMediaUseCase, ReplaceMediaUseCase, SetThumbnailUseCase, UploadMediaUseCase,
            },
        },
        outgoing::{blob_storage::BlobStore, db::MediaCatalog},
    },
};

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadMediaUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplaceMediaUseCase + Send + Sync>,
    pub set_thumbnail: Arc<dyn SetThumbnailUseCase + Send + Sync>,
    pub get_thumbnail: Arc<dyn GetThumbnailUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMediaUseCase + Send + Sync>,
    pub delete_all: Arc<dyn DeleteProductMediaUseCase + Send + Sync>,
    pub list: Arc<dyn ListMediaUseCase + Send + Sync>,
}

impl MediaUseCases {
    /// Wires every media service over one catalog and one object store.
    pub fn wire<C, S>(catalog: Arc<C>, store: Arc<S>, policy: MediaPolicy) -> Self
    where
        C: MediaCatalog + 'static,
        S: BlobStore + ?Sized + 'static,
    {
        Self {
            upload: Arc::new(UploadMediaService::new(
                catalog.clone(),
                store.clone(),
                policy.clone(),
            )),
            replace: Arc::new(ReplaceMediaService::new(
                catalog.clone(),
                store.clone(),
                policy.clone(),
            )),
            set_thumbnail: Arc::new(SetThumbnailService::new(catalog.clone())),
            get_thumbnail: Arc::new(GetThumbnailService::new(catalog.clone())),
            delete: Arc::new(DeleteMediaService::new(
                catalog.clone(),
                store.clone(),
                policy.clone(),
            )),
            delete_all: Arc::new(DeleteProductMediaService::new(
                catalog.clone(),
                store,
                policy.clone(),
            )),
            list: Arc::new(ListMediaService::new(catalog, policy)),
        }
    }
}
