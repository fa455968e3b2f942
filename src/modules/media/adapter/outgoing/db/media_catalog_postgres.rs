use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait, Unchanged,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::medias::{self, Entity as Medias};
use crate::media::application::{
    domain::entities::{FileType, MediaRecord, NewMediaRecord},
    ports::outgoing::db::{CatalogError, CatalogTx, MediaCatalog},
};

// ============================================================================
// Catalog (pool level)
// ============================================================================

#[derive(Clone)]
pub struct MediaCatalogPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaCatalogPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaCatalog for MediaCatalogPostgres {
    type Tx = PostgresCatalogTx;

    async fn begin(&self) -> Result<Self::Tx, CatalogError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        Ok(PostgresCatalogTx { txn })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<MediaRecord, CatalogError> {
        find_by_id(self.db.as_ref(), id).await
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<MediaRecord>, CatalogError> {
        find_by_product(self.db.as_ref(), product_id).await
    }

    async fn find_thumbnail(&self, product_id: &str) -> Result<MediaRecord, CatalogError> {
        find_thumbnail(self.db.as_ref(), product_id).await
    }
}

// ============================================================================
// Unit of work
// ============================================================================

/// Dropping it without `commit` rolls the transaction back.
pub struct PostgresCatalogTx {
    txn: DatabaseTransaction,
}

#[async_trait]
impl CatalogTx for PostgresCatalogTx {
    async fn insert(&mut self, record: NewMediaRecord) -> Result<MediaRecord, CatalogError> {
        let model = medias::ActiveModel {
            id: Set(record.id),
            product_id: Set(record.product_id),
            file_name: Set(record.file_name),
            file_url: Set(record.file_url),
            file_type: Set(record.file_type.as_str().to_string()),
            is_thumbnail: Set(record.is_thumbnail),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&self.txn)
        .await
        .map_err(map_db_err)?;

        to_record(model)
    }

    async fn find_by_id(&mut self, id: Uuid) -> Result<MediaRecord, CatalogError> {
        find_by_id(&self.txn, id).await
    }

    async fn find_by_product(
        &mut self,
        product_id: &str,
    ) -> Result<Vec<MediaRecord>, CatalogError> {
        find_by_product(&self.txn, product_id).await
    }

    async fn find_thumbnail(&mut self, product_id: &str) -> Result<MediaRecord, CatalogError> {
        find_thumbnail(&self.txn, product_id).await
    }

    async fn update_file(
        &mut self,
        id: Uuid,
        file_name: &str,
        file_url: &str,
    ) -> Result<MediaRecord, CatalogError> {
        let model = medias::ActiveModel {
            id: Unchanged(id),
            file_name: Set(file_name.to_string()),
            file_url: Set(file_url.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.txn)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => CatalogError::NotFound,
            other => map_db_err(other),
        })?;

        to_record(model)
    }

    async fn set_thumbnail_flag(&mut self, id: Uuid, value: bool) -> Result<(), CatalogError> {
        let res = Medias::update_many()
            .col_expr(medias::Column::IsThumbnail, Expr::value(value))
            .filter(medias::Column::Id.eq(id))
            .exec(&self.txn)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }

    async fn clear_thumbnail(&mut self, product_id: &str) -> Result<u64, CatalogError> {
        let res = Medias::update_many()
            .col_expr(medias::Column::IsThumbnail, Expr::value(false))
            .filter(medias::Column::ProductId.eq(product_id))
            .filter(medias::Column::IsThumbnail.eq(true))
            .exec(&self.txn)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected)
    }

    async fn delete(&mut self, id: Uuid) -> Result<u64, CatalogError> {
        let res = Medias::delete_by_id(id)
            .exec(&self.txn)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected)
    }

    async fn delete_many(&mut self, ids: &[Uuid]) -> Result<u64, CatalogError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let res = Medias::delete_many()
            .filter(medias::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.txn)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected)
    }

    async fn commit(self) -> Result<(), CatalogError> {
        self.txn.commit().await.map_err(map_db_err)
    }

    async fn rollback(self) -> Result<(), CatalogError> {
        self.txn.rollback().await.map_err(map_db_err)
    }
}

// =====================================================
// Queries shared by the pool and the transaction
// =====================================================

async fn find_by_id<C>(conn: &C, id: Uuid) -> Result<MediaRecord, CatalogError>
where
    C: ConnectionTrait,
{
    Medias::find_by_id(id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or(CatalogError::NotFound)
        .and_then(to_record)
}

async fn find_by_product<C>(conn: &C, product_id: &str) -> Result<Vec<MediaRecord>, CatalogError>
where
    C: ConnectionTrait,
{
    Medias::find()
        .filter(medias::Column::ProductId.eq(product_id))
        .order_by_asc(medias::Column::CreatedAt)
        .order_by_asc(medias::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(to_record)
        .collect()
}

async fn find_thumbnail<C>(conn: &C, product_id: &str) -> Result<MediaRecord, CatalogError>
where
    C: ConnectionTrait,
{
    Medias::find()
        .filter(medias::Column::ProductId.eq(product_id))
        .filter(medias::Column::IsThumbnail.eq(true))
        .filter(medias::Column::FileType.eq(FileType::Image.as_str()))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or(CatalogError::NotFound)
        .and_then(to_record)
}

// =====================================================
// Mapping helpers
// =====================================================

fn to_record(model: medias::Model) -> Result<MediaRecord, CatalogError> {
    let file_type = model
        .file_type
        .parse::<FileType>()
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

    Ok(MediaRecord {
        id: model.id,
        product_id: model.product_id,
        file_name: model.file_name,
        file_url: model.file_url,
        file_type,
        is_thumbnail: model.is_thumbnail,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

const PRIMARY_KEY: &str = "medias_pkey";

fn map_db_err(e: DbErr) -> CatalogError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        return unique_violation(detail);
    }

    let msg = e.to_string();
    if msg.contains("duplicate key value violates unique constraint") {
        return unique_violation(msg);
    }
    if msg.contains("violates check constraint") {
        return CatalogError::ConstraintViolation(msg);
    }
    CatalogError::DatabaseError(msg)
}

fn unique_violation(detail: String) -> CatalogError {
    if detail.contains(PRIMARY_KEY) {
        CatalogError::DuplicateId
    } else {
        CatalogError::ConstraintViolation(detail)
    }
}
