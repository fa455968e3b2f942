use actix_web::{http::StatusCode, HttpResponse};
use tracing::error;

use crate::media::application::ports::incoming::use_cases::MediaError;
use crate::shared::api::ApiResponse;

/// Single mapping from use-case failures to HTTP answers for every media
/// route.
pub fn map_media_error(e: MediaError) -> HttpResponse {
    let code = e.code();
    let message = e.to_string();

    match &e {
        MediaError::PayloadTooLarge { .. } => ApiResponse::payload_too_large(code, &message),

        MediaError::AlreadyThumbnail => ApiResponse::conflict(code, &message),

        MediaError::UnsupportedType { .. }
        | MediaError::InvalidThumbnailRequest
        | MediaError::TypeMismatch { .. }
        | MediaError::InvalidThumbnailTarget => ApiResponse::bad_request(code, &message),

        MediaError::NotFound(_) => ApiResponse::not_found(code, &message),

        MediaError::StorageFailure(detail) => {
            error!("Object storage failure: {}", detail);
            ApiResponse::bad_gateway(code, "Object storage is unavailable")
        }

        MediaError::StorageMetadataFailure(detail) => {
            error!("Media metadata failure after storage change: {}", detail);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                "Failed to save media metadata",
            )
        }

        MediaError::RepositoryError(detail) => {
            error!("Media repository error: {}", detail);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                "An unexpected error occurred",
            )
        }
    }
}
