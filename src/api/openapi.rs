use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::media::adapter::incoming::web::routes::dto::{
    BulkDeleteResponse, CleanupWarningResponse, DeleteMediaResponse, FailedFileResponse,
    MediaResponse, ReplaceMediaForm, ReplaceMediaResponse, UploadMediaForm,
};
use crate::media::application::domain::entities::FileType;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scena Media API",
        version = "1.0.0",
        description = "Images and videos attached to products, stored in object storage",
    ),
    paths(
        crate::media::adapter::incoming::web::routes::upload_media::upload_media_handler,
        crate::media::adapter::incoming::web::routes::replace_media::replace_media_handler,
        crate::media::adapter::incoming::web::routes::set_thumbnail::set_thumbnail_handler,
        crate::media::adapter::incoming::web::routes::get_thumbnail::get_thumbnail_handler,
        crate::media::adapter::incoming::web::routes::delete_media::delete_media_handler,
        crate::media::adapter::incoming::web::routes::delete_product_media::delete_product_media_handler,
        crate::media::adapter::incoming::web::routes::list_media::list_media_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Media DTOs
            FileType,
            MediaResponse,
            CleanupWarningResponse,
            ReplaceMediaResponse,
            DeleteMediaResponse,
            FailedFileResponse,
            BulkDeleteResponse,
            UploadMediaForm,
            ReplaceMediaForm
        )
    ),
    tags(
        (name = "media", description = "Product media endpoints"),
    )
)]
pub struct ApiDoc;
