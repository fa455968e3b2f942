use async_trait::async_trait;
use uuid::Uuid;

use crate::media::application::domain::entities::{MediaRecord, NewMediaRecord};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Media not found")]
    NotFound,

    #[error("Media id already exists")]
    DuplicateId,

    /// Check constraint or single-thumbnail index rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Unit of work
// ──────────────────────────────────────────────────────────
// Every mutation goes through a transaction. Dropping a transaction
// without calling `commit` discards its writes.
//

#[async_trait]
pub trait CatalogTx: Send {
    async fn insert(&mut self, record: NewMediaRecord) -> Result<MediaRecord, CatalogError>;

    async fn find_by_id(&mut self, id: Uuid) -> Result<MediaRecord, CatalogError>;

    async fn find_by_product(&mut self, product_id: &str)
        -> Result<Vec<MediaRecord>, CatalogError>;

    async fn find_thumbnail(&mut self, product_id: &str) -> Result<MediaRecord, CatalogError>;

    /// Refreshes `file_name`, `file_url` and `created_at`.
    async fn update_file(
        &mut self,
        id: Uuid,
        file_name: &str,
        file_url: &str,
    ) -> Result<MediaRecord, CatalogError>;

    /// Flips the flag on exactly one row. Other holders are left untouched.
    async fn set_thumbnail_flag(&mut self, id: Uuid, value: bool) -> Result<(), CatalogError>;

    /// Clears the flag on every holder of the product. Returns rows affected.
    async fn clear_thumbnail(&mut self, product_id: &str) -> Result<u64, CatalogError>;

    /// Idempotent: returns 0 when the row did not exist.
    async fn delete(&mut self, id: Uuid) -> Result<u64, CatalogError>;

    /// Removes exactly the listed rows. Returns rows affected.
    async fn delete_many(&mut self, ids: &[Uuid]) -> Result<u64, CatalogError>;

    async fn commit(self) -> Result<(), CatalogError>;

    async fn rollback(self) -> Result<(), CatalogError>;
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MediaCatalog: Send + Sync {
    type Tx: CatalogTx;

    async fn begin(&self) -> Result<Self::Tx, CatalogError>;

    async fn find_by_id(&self, id: Uuid) -> Result<MediaRecord, CatalogError>;

    /// Creation order. An empty vector is a valid answer.
    async fn find_by_product(&self, product_id: &str) -> Result<Vec<MediaRecord>, CatalogError>;

    async fn find_thumbnail(&self, product_id: &str) -> Result<MediaRecord, CatalogError>;
}
