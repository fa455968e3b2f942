// src/modules/media/adapter/incoming/web/routes/upload_media.rs

use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::media::adapter::incoming::web::routes::{
    dto::{MediaResponse, UploadMediaForm}, map_media_error, multipart_form::MediaForm,
};
use crate::media::application::ports::incoming::use_cases::UploadMediaCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadMediaQuery {
    /// Make the uploaded image the product thumbnail.
    #[serde(default)]
    pub is_thumbnail: bool,
}

#[utoipa::path(
    post,
    path = "/media/upload",
    tag = "media",
    params(UploadMediaQuery),
    request_body(content = UploadMediaForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Media stored", body = inline(SuccessResponse<MediaResponse>)),
        (status = 400, description = "Unsupported type, video thumbnail or missing field", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Object storage unavailable", body = ErrorResponse),
        (status = 500, description = "Metadata could not be saved", body = ErrorResponse)
    )
)]
#[post("/media/upload")]
pub async fn upload_media_handler(
    query: web::Query<UploadMediaQuery>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form = match MediaForm::read(payload, data.media_policy.max_file_size_bytes).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };

    let product_id = match form.require_product_id() {
        Ok(p) => p,
        Err(e) => return e.into_response(),
    };
    let file = match form.require_file() {
        Ok(f) => f,
        Err(e) => return e.into_response(),
    };

    let command = UploadMediaCommand {
        product_id,
        original_file_name: file.original_name,
        content_type: file.content_type,
        data: file.data,
        is_thumbnail: query.is_thumbnail,
    };

    match data.media.upload.execute(command).await {
        Ok(record) => ApiResponse::created(MediaResponse::from(record)),
        Err(e) => map_media_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::media::application::domain::policies::MediaPolicy;
    use crate::media::application::ports::incoming::use_cases::MediaError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{InMemoryBlobStore, InMemoryCatalog};
    use crate::tests::support::multipart::{self, Part};

    fn upload_request(uri: &str, parts: &[Part<'_>]) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header(("Content-Type", multipart::content_type()))
            .set_payload(multipart::body(parts))
    }

    #[actix_web::test]
    async fn test_upload_thumbnail_image_created() {
        let catalog = InMemoryCatalog::new();
        let store = InMemoryBlobStore::new();
        let app_state = TestAppStateBuilder::default()
            .with_catalog(catalog.clone())
            .with_store(store.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(upload_media_handler)).await;

        let req = upload_request(
            "/media/upload?is_thumbnail=true",
            &[
                multipart::product("p1"),
                Part::File {
                    name: "file",
                    file_name: "cover.PNG",
                    content_type: "image/png",
                    data: b"\x89PNG-data",
                },
            ],
        )
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["productId"], "p1");
        assert_eq!(body["data"]["fileType"], "image");
        assert_eq!(body["data"]["isThumbnail"], true);
        assert!(body["data"]["fileName"].as_str().unwrap().ends_with(".png"));

        assert_eq!(catalog.records().await.len(), 1);
        assert_eq!(store.object_count(), 1);
    }

    #[actix_web::test]
    async fn test_upload_video_thumbnail_rejected() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(upload_media_handler)).await;

        let req = upload_request(
            "/media/upload?is_thumbnail=true",
            &[multipart::product("p1"), multipart::file("video/mp4", b"mp4")],
        )
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_THUMBNAIL_REQUEST");
    }

    #[actix_web::test]
    async fn test_upload_unsupported_type_rejected() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(upload_media_handler)).await;

        let req = upload_request(
            "/media/upload",
            &[
                multipart::product("p1"),
                multipart::file("application/pdf", b"%PDF"),
            ],
        )
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_TYPE");
    }

    #[actix_web::test]
    async fn test_upload_too_large_rejected_while_streaming() {
        let store = InMemoryBlobStore::new();
        let app_state = TestAppStateBuilder::default()
            .with_store(store.clone())
            .with_policy(MediaPolicy::new(4))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(upload_media_handler)).await;

        let req = upload_request(
            "/media/upload",
            &[multipart::product("p1"), multipart::file("image/png", b"12345")],
        )
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(store.put_calls(), 0);
    }

    #[actix_web::test]
    async fn test_upload_missing_product_id() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(upload_media_handler)).await;

        let req =
            upload_request("/media/upload", &[multipart::file("image/png", b"png")]).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
        assert_eq!(body["error"]["message"], "Missing field: product_id");
    }

    #[actix_web::test]
    async fn test_upload_missing_file() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(upload_media_handler)).await;

        let req = upload_request("/media/upload", &[multipart::product("p1")]).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Missing field: file");
    }

    #[actix_web::test]
    async fn test_upload_storage_failure_is_bad_gateway() {
        let app_state = TestAppStateBuilder::default()
            .failing_with(MediaError::StorageFailure("blob down".to_string()))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(upload_media_handler)).await;

        let req = upload_request(
            "/media/upload",
            &[multipart::product("p1"), multipart::file("image/png", b"png")],
        )
        .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "STORAGE_FAILURE");
    }
}
