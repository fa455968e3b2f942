mod media_catalog_postgres;
pub mod sea_orm_entity;

pub use media_catalog_postgres::{MediaCatalogPostgres, PostgresCatalogTx};
