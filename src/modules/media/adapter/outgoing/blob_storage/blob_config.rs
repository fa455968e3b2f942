use std::env;
use std::path::PathBuf;

use crate::media::application::ports::outgoing::blob_storage::BlobStoreError;

pub const DEFAULT_BLOB_API_URL: &str = "https://blob.vercel-storage.com";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobBackend {
    Vercel { api_url: String, token: String },
    Local { root: PathBuf, base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobConfig {
    pub backend: BlobBackend,
}

impl BlobConfig {
    /// Reads `BLOB_BACKEND` (`vercel` | `local`, default `local`) and the
    /// variables of the chosen backend.
    pub fn from_env() -> Result<Self, BlobStoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`BlobConfig::from_env`] over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BlobStoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend = match get("BLOB_BACKEND").as_deref().unwrap_or("local") {
            "vercel" => {
                let token = get("BLOB_READ_WRITE_TOKEN").ok_or_else(|| {
                    BlobStoreError::Configuration(
                        "BLOB_READ_WRITE_TOKEN must be set for the vercel backend".to_string(),
                    )
                })?;
                BlobBackend::Vercel {
                    api_url: get("BLOB_API_URL")
                        .unwrap_or_else(|| DEFAULT_BLOB_API_URL.to_string()),
                    token,
                }
            }
            "local" => BlobBackend::Local {
                root: PathBuf::from(
                    get("MEDIA_UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
                ),
                base_url: get("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
            other => {
                return Err(BlobStoreError::Configuration(format!(
                    "unknown BLOB_BACKEND '{other}', expected 'vercel' or 'local'"
                )))
            }
        };

        Ok(Self { backend })
    }
}
