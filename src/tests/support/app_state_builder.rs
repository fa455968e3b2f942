use actix_web::web;
use std::sync::Arc;

use crate::media::application::domain::policies::MediaPolicy;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::tests::support::in_memory::{InMemoryBlobStore, InMemoryCatalog};
use crate::tests::support::stubs::FailingMediaUseCase;
use crate::media::application::ports::incoming::use_cases::MediaError;
use crate::AppState;

/// Route-test state. By default every use case runs for real over the
/// in-memory catalog and blob store, so handlers see genuine results.
pub struct TestAppStateBuilder {
    catalog: InMemoryCatalog,
    store: InMemoryBlobStore,
    policy: MediaPolicy,
    failing: Option<MediaError>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            catalog: InMemoryCatalog::new(),
            store: InMemoryBlobStore::new(),
            policy: MediaPolicy::default(),
            failing: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_catalog(mut self, catalog: InMemoryCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_store(mut self, store: InMemoryBlobStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_policy(mut self, policy: MediaPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Every use case fails with `err`.
    pub fn failing_with(mut self, err: MediaError) -> Self {
        self.failing = Some(err);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let media = match self.failing {
            Some(err) => {
                let stub = Arc::new(FailingMediaUseCase(err));
                MediaUseCases {
                    upload: stub.clone(),
                    replace: stub.clone(),
                    set_thumbnail: stub.clone(),
                    get_thumbnail: stub.clone(),
                    delete: stub.clone(),
                    delete_all: stub.clone(),
                    list: stub,
                }
            }
            None => MediaUseCases::wire(
                Arc::new(self.catalog),
                Arc::new(self.store),
                self.policy.clone(),
            ),
        };

        web::Data::new(AppState {
            media,
            media_policy: self.policy,
        })
    }
}
