//! Shared in-memory doubles for the media ports.
//!
//! `InMemoryCatalog` enforces the same rules as the Postgres schema (unique
//! id, images only as thumbnails, at most one thumbnail per product) so
//! service tests exercise the real constraint failures.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::media::application::domain::entities::{FileType, MediaRecord, NewMediaRecord};
use crate::media::application::ports::outgoing::blob_storage::{
    BlobStore, BlobStoreError, PutBlob, StoredBlob,
};
use crate::media::application::ports::outgoing::db::{CatalogError, CatalogTx, MediaCatalog};

// ────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────

#[derive(Default)]
struct CatalogState {
    records: Vec<MediaRecord>,
    fail_insert: bool,
    fail_update: bool,
    fail_commit: bool,
    fail_reads: bool,
    late_arrival: Option<MediaRecord>,
}

#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, record: MediaRecord) {
        self.state.lock().await.records.push(record);
    }

    pub async fn records(&self) -> Vec<MediaRecord> {
        self.state.lock().await.records.clone()
    }

    pub async fn record(&self, id: Uuid) -> Option<MediaRecord> {
        self.state
            .lock()
            .await
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub async fn thumbnails(&self, product_id: &str) -> Vec<MediaRecord> {
        self.state
            .lock()
            .await
            .records
            .iter()
            .filter(|r| r.product_id == product_id && r.is_thumbnail)
            .cloned()
            .collect()
    }

    pub async fn fail_insert(&self) {
        self.state.lock().await.fail_insert = true;
    }

    pub async fn fail_update(&self) {
        self.state.lock().await.fail_update = true;
    }

    pub async fn fail_commit(&self) {
        self.state.lock().await.fail_commit = true;
    }

    pub async fn fail_reads(&self) {
        self.state.lock().await.fail_reads = true;
    }

    /// Stores `record` right after the next `find_by_product` has answered,
    /// as a concurrent upload landing mid-request would.
    pub async fn arrive_after_next_listing(&self, record: MediaRecord) {
        self.state.lock().await.late_arrival = Some(record);
    }
}

pub fn image_record(product_id: &str, is_thumbnail: bool) -> MediaRecord {
    record_of(product_id, FileType::Image, is_thumbnail)
}

pub fn video_record(product_id: &str) -> MediaRecord {
    record_of(product_id, FileType::Video, false)
}

fn record_of(product_id: &str, file_type: FileType, is_thumbnail: bool) -> MediaRecord {
    let id = Uuid::new_v4();
    let ext = match file_type {
        FileType::Image => "png",
        FileType::Video => "mp4",
    };
    let file_name = format!("{}.{ext}", id.simple());
    MediaRecord {
        id,
        product_id: product_id.to_string(),
        file_url: format!("{BLOB_BASE}/{file_name}"),
        file_name,
        file_type,
        is_thumbnail,
        created_at: Utc::now(),
    }
}

fn check_single_thumbnail(records: &[MediaRecord], product_id: &str) -> Result<(), CatalogError> {
    let holders = records
        .iter()
        .filter(|r| r.product_id == product_id && r.is_thumbnail)
        .count();
    if holders > 1 {
        return Err(CatalogError::ConstraintViolation(
            "uq_medias_product_thumbnail".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl MediaCatalog for InMemoryCatalog {
    type Tx = InMemoryTx;

    async fn begin(&self) -> Result<Self::Tx, CatalogError> {
        let guard = self.state.clone().lock_owned().await;
        let working = guard.records.clone();
        Ok(InMemoryTx { guard, working })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<MediaRecord, CatalogError> {
        let state = self.state.lock().await;
        if state.fail_reads {
            return Err(CatalogError::DatabaseError("read failed".to_string()));
        }
        state
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn find_by_product(&self, product_id: &str) -> Result<Vec<MediaRecord>, CatalogError> {
        let mut state = self.state.lock().await;
        if state.fail_reads {
            return Err(CatalogError::DatabaseError("read failed".to_string()));
        }
        let mut found: Vec<MediaRecord> = state
            .records
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.created_at);
        if let Some(late) = state.late_arrival.take() {
            state.records.push(late);
        }
        Ok(found)
    }

    async fn find_thumbnail(&self, product_id: &str) -> Result<MediaRecord, CatalogError> {
        let state = self.state.lock().await;
        if state.fail_reads {
            return Err(CatalogError::DatabaseError("read failed".to_string()));
        }
        state
            .records
            .iter()
            .find(|r| r.product_id == product_id && r.is_thumbnail)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }
}

/// Works on a copy of the rows; `commit` writes the copy back.
pub struct InMemoryTx {
    guard: OwnedMutexGuard<CatalogState>,
    working: Vec<MediaRecord>,
}

impl InMemoryTx {
    fn position(&self, id: Uuid) -> Result<usize, CatalogError> {
        self.working
            .iter()
            .position(|r| r.id == id)
            .ok_or(CatalogError::NotFound)
    }
}

#[async_trait]
impl CatalogTx for InMemoryTx {
    async fn insert(&mut self, record: NewMediaRecord) -> Result<MediaRecord, CatalogError> {
        if self.guard.fail_insert {
            return Err(CatalogError::DatabaseError("insert failed".to_string()));
        }
        if self.working.iter().any(|r| r.id == record.id) {
            return Err(CatalogError::DuplicateId);
        }
        if record.is_thumbnail && !record.file_type.can_be_thumbnail() {
            return Err(CatalogError::ConstraintViolation(
                "ck_medias_thumbnail_is_image".to_string(),
            ));
        }

        let stored = MediaRecord {
            id: record.id,
            product_id: record.product_id,
            file_name: record.file_name,
            file_url: record.file_url,
            file_type: record.file_type,
            is_thumbnail: record.is_thumbnail,
            created_at: Utc::now(),
        };
        self.working.push(stored.clone());
        check_single_thumbnail(&self.working, &stored.product_id)?;
        Ok(stored)
    }

    async fn find_by_id(&mut self, id: Uuid) -> Result<MediaRecord, CatalogError> {
        let idx = self.position(id)?;
        Ok(self.working[idx].clone())
    }

    async fn find_by_product(
        &mut self,
        product_id: &str,
    ) -> Result<Vec<MediaRecord>, CatalogError> {
        Ok(self
            .working
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn find_thumbnail(&mut self, product_id: &str) -> Result<MediaRecord, CatalogError> {
        self.working
            .iter()
            .find(|r| r.product_id == product_id && r.is_thumbnail)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn update_file(
        &mut self,
        id: Uuid,
        file_name: &str,
        file_url: &str,
    ) -> Result<MediaRecord, CatalogError> {
        if self.guard.fail_update {
            return Err(CatalogError::DatabaseError("update failed".to_string()));
        }
        let idx = self.position(id)?;
        let row = &mut self.working[idx];
        row.file_name = file_name.to_string();
        row.file_url = file_url.to_string();
        row.created_at = Utc::now();
        Ok(row.clone())
    }

    async fn set_thumbnail_flag(&mut self, id: Uuid, value: bool) -> Result<(), CatalogError> {
        let idx = self.position(id)?;
        if value && !self.working[idx].file_type.can_be_thumbnail() {
            return Err(CatalogError::ConstraintViolation(
                "ck_medias_thumbnail_is_image".to_string(),
            ));
        }
        self.working[idx].is_thumbnail = value;
        let product_id = self.working[idx].product_id.clone();
        check_single_thumbnail(&self.working, &product_id)
    }

    async fn clear_thumbnail(&mut self, product_id: &str) -> Result<u64, CatalogError> {
        let mut cleared = 0;
        for row in self
            .working
            .iter_mut()
            .filter(|r| r.product_id == product_id && r.is_thumbnail)
        {
            row.is_thumbnail = false;
            cleared += 1;
        }
        Ok(cleared)
    }

    async fn delete(&mut self, id: Uuid) -> Result<u64, CatalogError> {
        let before = self.working.len();
        self.working.retain(|r| r.id != id);
        Ok((before - self.working.len()) as u64)
    }

    async fn delete_many(&mut self, ids: &[Uuid]) -> Result<u64, CatalogError> {
        let before = self.working.len();
        self.working.retain(|r| !ids.contains(&r.id));
        Ok((before - self.working.len()) as u64)
    }

    async fn commit(mut self) -> Result<(), CatalogError> {
        if self.guard.fail_commit {
            return Err(CatalogError::DatabaseError("commit failed".to_string()));
        }
        self.guard.records = std::mem::take(&mut self.working);
        Ok(())
    }

    async fn rollback(self) -> Result<(), CatalogError> {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────
// Blob store
// ────────────────────────────────────────────────────────────

pub const BLOB_BASE: &str = "https://blob.test";

#[derive(Default)]
struct BlobState {
    objects: HashMap<String, Bytes>,
    failing_deletes: HashSet<String>,
    fail_put: bool,
    put_delay: Option<Duration>,
    delete_delay: Option<Duration>,
    put_calls: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryBlobStore {
    state: Arc<StdMutex<BlobState>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an object as if it had been uploaded earlier.
    pub fn seed(&self, file_url: &str) {
        self.state
            .lock()
            .unwrap()
            .objects
            .insert(file_url.to_string(), Bytes::from_static(b"seed"));
    }

    pub fn contains(&self, file_url: &str) -> bool {
        self.state.lock().unwrap().objects.contains_key(file_url)
    }

    pub fn object_count(&self) -> usize {
        self.state.lock().unwrap().objects.len()
    }

    pub fn put_calls(&self) -> usize {
        self.state.lock().unwrap().put_calls
    }

    pub fn fail_put(&self) {
        self.state.lock().unwrap().fail_put = true;
    }

    pub fn fail_delete_of(&self, file_url: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_deletes
            .insert(file_url.to_string());
    }

    pub fn delay_put(&self, delay: Duration) {
        self.state.lock().unwrap().put_delay = Some(delay);
    }

    pub fn delay_delete(&self, delay: Duration) {
        self.state.lock().unwrap().delete_delay = Some(delay);
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, blob: PutBlob) -> Result<StoredBlob, BlobStoreError> {
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.put_calls += 1;
            if state.fail_put {
                return Err(BlobStoreError::UploadFailed("blob store offline".to_string()));
            }
            state.put_delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let file_url = format!("{BLOB_BASE}/{}", blob.file_name);
        self.state
            .lock()
            .unwrap()
            .objects
            .insert(file_url.clone(), blob.data);

        Ok(StoredBlob {
            file_name: blob.file_name,
            file_url,
        })
    }

    async fn delete(&self, file_url: &str) -> Result<(), BlobStoreError> {
        let delay = {
            let state = self.state.lock().unwrap();
            if state.failing_deletes.contains(file_url) {
                return Err(BlobStoreError::DeleteFailed(format!("refused: {file_url}")));
            }
            state.delete_delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.state.lock().unwrap().objects.remove(file_url) {
            Some(_) => Ok(()),
            None => Err(BlobStoreError::NotFound(file_url.to_string())),
        }
    }
}
