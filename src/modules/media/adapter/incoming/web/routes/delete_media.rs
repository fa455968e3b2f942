use actix_web::{delete, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::media::adapter::incoming::web::routes::{
    dto::{warnings_response, DeleteMediaResponse, MediaIdQuery},
    map_media_error,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/media",
    tag = "media",
    params(MediaIdQuery),
    responses(
        (status = 200, description = "Media deleted; storage cleanup problems are listed as warnings", body = inline(SuccessResponse<DeleteMediaResponse>)),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Metadata could not be removed", body = ErrorResponse)
    )
)]
#[delete("/media")]
pub async fn delete_media_handler(
    query: web::Query<MediaIdQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.media.delete.execute(query.id_media).await {
        Ok(outcome) => ApiResponse::success(DeleteMediaResponse {
            message: "Media deleted".to_string(),
            media_id: outcome.media_id,
            warnings: warnings_response(outcome.warnings),
        }),
        Err(e) => map_media_error(e),
    }
}
