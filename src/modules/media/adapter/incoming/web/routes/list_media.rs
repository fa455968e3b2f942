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
    path = "/media",
    tag = "media",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Media of the product, oldest first", body = inline(SuccessResponse<Vec<MediaResponse>>)),
        (status = 400, description = "Blank product id", body = ErrorResponse),
        (status = 404, description = "Product has no media (only when configured)", body = ErrorResponse)
    )
)]
#[get("/media")]
pub async fn list_media_handler(
    query: web::Query<ProductIdQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = match query.product_id() {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.media.list.execute(product_id).await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(MediaResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => map_media_error(e),
    }
}
