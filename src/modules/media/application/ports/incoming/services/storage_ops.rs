use std::time::Duration;

use tracing::warn;

use crate::media::application::{
    domain::{
        entities::{CleanupWarning, FileType},
        policies::MediaPolicy,
    },
    ports::{
        incoming::use_cases::MediaError,
        outgoing::blob_storage::{BlobStore, PutBlob, StoredBlob},
    },
};

/// Mandatory store step. A failure or an expired deadline aborts the caller.
pub(crate) async fn store_within<S>(
    store: &S,
    timeout: Duration,
    blob: PutBlob,
) -> Result<StoredBlob, MediaError>
where
    S: BlobStore + ?Sized,
{
    match tokio::time::timeout(timeout, store.put(blob)).await {
        Ok(Ok(stored)) => Ok(stored),
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(MediaError::StorageFailure(format!(
            "storage did not answer within {}s",
            timeout.as_secs()
        ))),
    }
}

/// Best-effort removal. Returns a warning instead of failing.
pub(crate) async fn remove_best_effort<S>(
    store: &S,
    timeout: Duration,
    file_url: &str,
) -> Option<CleanupWarning>
where
    S: BlobStore + ?Sized,
{
    let reason = match tokio::time::timeout(timeout, store.delete(file_url)).await {
        Ok(Ok(())) => return None,
        Ok(Err(e)) => e.to_string(),
        Err(_) => format!("delete timed out after {}s", timeout.as_secs()),
    };

    warn!(file_url = %file_url, reason = %reason, "Storage cleanup failed");

    Some(CleanupWarning {
        file_url: file_url.to_string(),
        reason,
    })
}

pub(crate) fn classify_content(policy: &MediaPolicy, content_type: &str) -> Result<FileType, MediaError> {
    policy
        .classify(content_type)
        .ok_or_else(|| MediaError::UnsupportedType {
            content_type: content_type.to_string(),
            allowed: policy.allowed_mime_types().join(", "),
        })
}

pub(crate) fn check_size(policy: &MediaPolicy, len: usize) -> Result<(), MediaError> {
    let actual_bytes = len as u64;
    if policy.exceeds_max_size(actual_bytes) {
        return Err(MediaError::PayloadTooLarge {
            max_bytes: policy.max_file_size_bytes,
            actual_bytes,
        });
    }
    Ok(())
}
