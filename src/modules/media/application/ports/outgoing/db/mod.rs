mod media_catalog;

pub use media_catalog::{CatalogError, CatalogTx, MediaCatalog};
