mod blob_config;
mod local_blob_store;
mod vercel_blob_store;

pub use blob_config::{BlobBackend, BlobConfig};
pub use local_blob_store::LocalBlobStore;
pub use vercel_blob_store::VercelBlobStore;
