use actix_web::{delete, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::media::adapter::incoming::web::routes::{
    dto::{BulkDeleteResponse, ProductIdQuery},
    map_media_error,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Removes every media of a product. Storage deletions are attempted for
/// all files; the catalog rows are removed even when some of them fail.
#[utoipa::path(
    delete,
    path = "/media/all",
    tag = "media",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Deletion summary", body = inline(SuccessResponse<BulkDeleteResponse>)),
        (status = 400, description = "Blank product id", body = ErrorResponse),
        (status = 404, description = "Product has no media", body = ErrorResponse),
        (status = 500, description = "Metadata could not be removed", body = ErrorResponse)
    )
)]
#[delete("/media/all")]
pub async fn delete_product_media_handler(
    query: web::Query<ProductIdQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = match query.product_id() {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.media.delete_all.execute(product_id).await {
        Ok(outcome) => ApiResponse::success(BulkDeleteResponse::from(outcome)),
        Err(e) => map_media_error(e),
    }
}
