use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::media::application::ports::outgoing::blob_storage::{
    BlobStore, BlobStoreError, PutBlob, StoredBlob,
};

const API_VERSION: &str = "7";

/// Successful `PUT` answer of the blob API.
#[derive(Debug, Clone, Deserialize)]
struct PutResponse {
    url: String,
    pathname: String,
}

#[derive(Debug, Serialize)]
struct DeleteRequest<'a> {
    urls: [&'a str; 1],
}

/// Failure answered by, or on the way to, the blob API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum BlobApiError {
    #[error("blob api returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("blob api unreachable: {0}")]
    Transport(String),
}

fn map_upload_error(err: BlobApiError) -> BlobStoreError {
    match err {
        BlobApiError::Status { status: 401 | 403, .. } => {
            BlobStoreError::Configuration(err.to_string())
        }
        other => BlobStoreError::UploadFailed(other.to_string()),
    }
}

fn map_delete_error(err: BlobApiError) -> BlobStoreError {
    match err {
        BlobApiError::Status { status: 404, .. } => BlobStoreError::NotFound(err.to_string()),
        other => BlobStoreError::DeleteFailed(other.to_string()),
    }
}

/// Internal seam to make the adapter testable without an HTTP server.
#[async_trait]
trait BlobHttpClient: Send + Sync {
    async fn put_object(
        &self,
        pathname: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<PutResponse, BlobApiError>;

    async fn delete_object(&self, url: &str) -> Result<(), BlobApiError>;
}

/// Object store backed by the Vercel Blob HTTP API.
#[derive(Clone)]
pub struct VercelBlobStore {
    client: Arc<dyn BlobHttpClient>,
}

impl VercelBlobStore {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Arc::new(ReqwestBlobClient {
                http: reqwest::Client::new(),
                api_url: api_url.into().trim_end_matches('/').to_string(),
                token: token.into(),
            }),
        }
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn BlobHttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlobStore for VercelBlobStore {
    async fn put(&self, blob: PutBlob) -> Result<StoredBlob, BlobStoreError> {
        let size = blob.data.len();
        let res = self
            .client
            .put_object(&blob.file_name, &blob.content_type, blob.data)
            .await
            .map_err(map_upload_error)?;

        info!(pathname = %res.pathname, size_bytes = size, "Blob uploaded");

        Ok(StoredBlob {
            file_name: res.pathname,
            file_url: res.url,
        })
    }

    async fn delete(&self, file_url: &str) -> Result<(), BlobStoreError> {
        if !file_url.starts_with("https://") {
            return Err(BlobStoreError::InvalidLocation(file_url.to_string()));
        }

        self.client
            .delete_object(file_url)
            .await
            .map_err(map_delete_error)?;

        debug!(file_url = %file_url, "Blob deleted");
        Ok(())
    }
}

// ============================================================================
// Real HTTP client (reqwest)
// ============================================================================

struct ReqwestBlobClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

#[async_trait]
impl BlobHttpClient for ReqwestBlobClient {
    async fn put_object(
        &self,
        pathname: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<PutResponse, BlobApiError> {
        let res = self
            .http
            .put(format!("{}/{}", self.api_url, pathname))
            .bearer_auth(&self.token)
            .header("x-api-version", API_VERSION)
            .header("x-access", "public")
            .header("x-content-type", content_type)
            .header("x-add-random-suffix", "0")
            .body(data)
            .send()
            .await
            .map_err(transport)?;

        let res = check_status(res).await?;
        res.json::<PutResponse>().await.map_err(transport)
    }

    async fn delete_object(&self, url: &str) -> Result<(), BlobApiError> {
        let res = self
            .http
            .post(format!("{}/delete", self.api_url))
            .bearer_auth(&self.token)
            .header("x-api-version", API_VERSION)
            .json(&DeleteRequest { urls: [url] })
            .send()
            .await
            .map_err(transport)?;

        check_status(res).await?;
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> BlobApiError {
    BlobApiError::Transport(err.to_string())
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, BlobApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(BlobApiError::Status {
        status: status.as_u16(),
        body,
    })
}
