use actix_multipart::Multipart;
use actix_web::{put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::media::adapter::incoming::web::routes::{
    dto::{
        warnings_response, MediaIdQuery, MediaResponse, ReplaceMediaForm, ReplaceMediaResponse,
    },
    map_media_error,
    multipart_form::MediaForm,
};
use crate::media::application::ports::incoming::use_cases::ReplaceMediaCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Swaps the stored file of a media, keeping its id, product and
/// thumbnail flag. The new file must have the same kind (image/video).
#[utoipa::path(
    put,
    path = "/media/update",
    tag = "media",
    params(MediaIdQuery),
    request_body(content = ReplaceMediaForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Media replaced", body = inline(SuccessResponse<ReplaceMediaResponse>)),
        (status = 400, description = "Unsupported type or type mismatch", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Object storage unavailable", body = ErrorResponse)
    )
)]
#[put("/media/update")]
pub async fn replace_media_handler(
    query: web::Query<MediaIdQuery>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form = match MediaForm::read(payload, data.media_policy.max_file_size_bytes).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };
    let file = match form.require_file() {
        Ok(f) => f,
        Err(e) => return e.into_response(),
    };

    let command = ReplaceMediaCommand {
        media_id: query.id_media,
        original_file_name: file.original_name,
        content_type: file.content_type,
        data: file.data,
    };

    match data.media.replace.execute(command).await {
        Ok(outcome) => ApiResponse::success(ReplaceMediaResponse {
            media: MediaResponse::from(outcome.record),
            warnings: warnings_response(outcome.warnings),
        }),
        Err(e) => map_media_error(e),
    }
}
