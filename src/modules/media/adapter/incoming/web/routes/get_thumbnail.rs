use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::media::adapter::incoming::web::routes::{
    dto::{MediaResponse, ProductIdQuery},
    map_media_error,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/media/thumbnail",
    tag = "media",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Current thumbnail of the product", body = inline(SuccessResponse<MediaResponse>)),
        (status = 400, description = "Blank product id", body = ErrorResponse),
        (status = 404, description = "Product has no thumbnail", body = ErrorResponse)
    )
)]
#[get("/media/thumbnail")]
pub async fn get_thumbnail_handler(
    query: web::Query<ProductIdQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = match query.product_id() {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.media.get_thumbnail.execute(product_id).await {
        Ok(record) => ApiResponse::success(MediaResponse::from(record)),
        Err(e) => map_media_error(e),
    }
}
