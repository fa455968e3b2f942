use actix_multipart::{Field, Multipart};
use actix_web::HttpResponse;
use bytes::{Bytes, BytesMut};
use futures::{StreamExt, TryStreamExt};

use crate::shared::api::ApiResponse;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// The file part of a media form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: Option<String>,
    /// Declared by the client for the part, without parameters.
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Default)]
pub struct MediaForm {
    pub product_id: Option<String>,
    pub file: Option<UploadedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("File too large (max {max_bytes} bytes)")]
    TooLarge { max_bytes: u64 },
}

impl FormError {
    pub fn into_response(self) -> HttpResponse {
        let message = self.to_string();
        match self {
            FormError::Malformed(_) => ApiResponse::bad_request("INVALID_MULTIPART", &message),
            FormError::MissingField(_) => ApiResponse::bad_request("MISSING_FIELD", &message),
            FormError::TooLarge { .. } => {
                ApiResponse::payload_too_large("PAYLOAD_TOO_LARGE", &message)
            }
        }
    }
}

impl MediaForm {
    /// Reads `product_id` and `file` parts. The file part is capped at
    /// `max_file_bytes` while streaming; other parts are skipped.
    pub async fn read(mut payload: Multipart, max_file_bytes: u64) -> Result<Self, FormError> {
        let mut form = MediaForm::default();

        while let Some(field) = payload
            .try_next()
            .await
            .map_err(|e| FormError::Malformed(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "product_id" => {
                    let raw = read_capped(field, 1024).await?;
                    let value = String::from_utf8(raw.to_vec())
                        .map_err(|_| FormError::Malformed("product_id is not UTF-8".to_string()))?;
                    form.product_id = Some(value.trim().to_string());
                }
                "file" => {
                    let original_name = field
                        .content_disposition()
                        .and_then(|cd| cd.get_filename())
                        .map(|s| s.to_string());
                    let content_type = field
                        .content_type()
                        .map(|m| m.essence_str().to_string())
                        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
                    let data = read_capped(field, max_file_bytes).await?;

                    form.file = Some(UploadedFile {
                        original_name,
                        content_type,
                        data,
                    });
                }
                _ => drain(field).await?,
            }
        }

        Ok(form)
    }

    pub fn require_file(&mut self) -> Result<UploadedFile, FormError> {
        self.file.take().ok_or(FormError::MissingField("file"))
    }

    pub fn require_product_id(&mut self) -> Result<String, FormError> {
        self.product_id
            .take()
            .filter(|p| !p.is_empty())
            .ok_or(FormError::MissingField("product_id"))
    }
}

async fn read_capped(mut field: Field, max_bytes: u64) -> Result<Bytes, FormError> {
    let mut buf = BytesMut::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| FormError::Malformed(e.to_string()))?;
        if (buf.len() + chunk.len()) as u64 > max_bytes {
            return Err(FormError::TooLarge { max_bytes });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf.freeze())
}

async fn drain(mut field: Field) -> Result<(), FormError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| FormError::Malformed(e.to_string()))?;
    }
    Ok(())
}
