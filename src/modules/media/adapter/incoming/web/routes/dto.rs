use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::media::application::{
    domain::entities::{CleanupWarning, FileType, MediaRecord},
    ports::incoming::use_cases::{BulkDeleteOutcome, FailedFile},
};
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Query strings
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct MediaIdQuery {
    pub id_media: Uuid,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductIdQuery {
    pub id_product: String,
}

impl ProductIdQuery {
    /// Trimmed product id, or a 400 response when it is blank.
    pub fn product_id(&self) -> Result<&str, HttpResponse> {
        let id = self.id_product.trim();
        if id.is_empty() {
            return Err(ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "id_product must not be empty",
            ));
        }
        Ok(id)
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs shared by the media routes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id: Uuid,
    pub product_id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: FileType,
    pub is_thumbnail: bool,
    pub created_at: DateTime<Utc>,
}

impl From<MediaRecord> for MediaResponse {
    fn from(r: MediaRecord) -> Self {
        Self {
            id: r.id,
            product_id: r.product_id,
            file_name: r.file_name,
            file_url: r.file_url,
            file_type: r.file_type,
            is_thumbnail: r.is_thumbnail,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanupWarningResponse {
    pub file_url: String,
    pub reason: String,
}

impl From<CleanupWarning> for CleanupWarningResponse {
    fn from(w: CleanupWarning) -> Self {
        Self {
            file_url: w.file_url,
            reason: w.reason,
        }
    }
}

pub fn warnings_response(warnings: Vec<CleanupWarning>) -> Vec<CleanupWarningResponse> {
    warnings.into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceMediaResponse {
    #[serde(flatten)]
    pub media: MediaResponse,
    pub warnings: Vec<CleanupWarningResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMediaResponse {
    pub message: String,
    pub media_id: Uuid,
    pub warnings: Vec<CleanupWarningResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FailedFileResponse {
    pub media_id: Uuid,
    pub file_url: String,
    pub error: String,
}

impl From<FailedFile> for FailedFileResponse {
    fn from(f: FailedFile) -> Self {
        Self {
            media_id: f.media_id,
            file_url: f.file_url,
            error: f.error,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub message: String,
    pub product_id: String,
    pub records_found: usize,
    pub deleted_files: usize,
    pub failed_files: usize,
    pub deleted_db_entries: u64,
    pub errors: Vec<FailedFileResponse>,
}

impl From<BulkDeleteOutcome> for BulkDeleteResponse {
    fn from(o: BulkDeleteOutcome) -> Self {
        let message = if o.failed_files == 0 {
            format!("Deleted all media of product {}", o.product_id)
        } else {
            format!(
                "Deleted media of product {} with {} storage errors",
                o.product_id, o.failed_files
            )
        };

        Self {
            message,
            product_id: o.product_id,
            records_found: o.records_found,
            deleted_files: o.deleted_files,
            failed_files: o.failed_files,
            deleted_db_entries: o.deleted_db_entries,
            errors: o.errors.into_iter().map(Into::into).collect(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Multipart request shapes (documentation only)
// ──────────────────────────────────────────────────────────
//

#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadMediaForm {
    pub product_id: String,
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ReplaceMediaForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
