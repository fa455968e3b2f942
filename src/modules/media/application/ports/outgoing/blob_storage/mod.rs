mod blob_store;

pub use blob_store::{BlobStore, BlobStoreError, PutBlob, StoredBlob};
