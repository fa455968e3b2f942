use std::io::ErrorKind;

use actix_files::NamedFile;
use actix_web::{get, web, HttpRequest, HttpResponse};
use tracing::error;

use crate::media::adapter::outgoing::blob_storage::LocalBlobStore;
use crate::shared::api::ApiResponse;

/// Serves files written by the local blob backend. Only registered when
/// that backend is active. Content type, conditional and range requests are
/// handled by `NamedFile`.
#[get("/media/files/{file_name}")]
pub async fn serve_file_handler(
    req: HttpRequest,
    path: web::Path<String>,
    store: web::Data<LocalBlobStore>,
) -> HttpResponse {
    let Ok(file_path) = store.path_for(&path.into_inner()) else {
        return ApiResponse::not_found("NOT_FOUND", "File not found");
    };

    match NamedFile::open_async(&file_path).await {
        Ok(file) => file.into_response(&req),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            ApiResponse::not_found("NOT_FOUND", "File not found")
        }
        Err(e) => {
            error!("Failed to open {}: {}", file_path.display(), e);
            ApiResponse::internal_error()
        }
    }
}
