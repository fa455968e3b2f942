use actix_web::{put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::media::adapter::incoming::web::routes::{
    dto::{MediaIdQuery, MediaResponse},
    map_media_error,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Makes an image the thumbnail of its product. The previous holder loses
/// the flag in the same transaction.
#[utoipa::path(
    put,
    path = "/media/thumbnail",
    tag = "media",
    params(MediaIdQuery),
    responses(
        (status = 200, description = "New thumbnail", body = inline(SuccessResponse<MediaResponse>)),
        (status = 400, description = "Media is not an image", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 409, description = "Media already is the thumbnail", body = ErrorResponse)
    )
)]
#[put("/media/thumbnail")]
pub async fn set_thumbnail_handler(
    query: web::Query<MediaIdQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.media.set_thumbnail.execute(query.id_media).await {
        Ok(record) => ApiResponse::success(MediaResponse::from(record)),
        Err(e) => map_media_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{image_record, video_record, InMemoryCatalog};

    #[actix_web::test]
    async fn test_set_thumbnail_moves_flag() {
        let catalog = InMemoryCatalog::new();
        let old = image_record("p1", true);
        let new = image_record("p1", false);
        catalog.seed(old.clone()).await;
        catalog.seed(new.clone()).await;

        let app_state = TestAppStateBuilder::default()
            .with_catalog(catalog.clone())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(set_thumbnail_handler))
                .await;

        let req = test::TestRequest::put()
            .uri(&format!("/media/thumbnail?id_media={}", new.id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], new.id.to_string());
        assert_eq!(body["data"]["isThumbnail"], true);

        let thumbs = catalog.thumbnails("p1").await;
        assert_eq!(thumbs.len(), 1);
        assert_eq!(thumbs[0].id, new.id);
    }

    #[actix_web::test]
    async fn test_set_thumbnail_on_video_rejected() {
        let catalog = InMemoryCatalog::new();
        let video = video_record("p1");
        catalog.seed(video.clone()).await;

        let app_state = TestAppStateBuilder::default()
            .with_catalog(catalog)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(set_thumbnail_handler))
                .await;

        let req = test::TestRequest::put()
            .uri(&format!("/media/thumbnail?id_media={}", video.id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_THUMBNAIL_TARGET");
    }

    #[actix_web::test]
    async fn test_set_thumbnail_twice_conflicts() {
        let catalog = InMemoryCatalog::new();
        let thumb = image_record("p1", true);
        catalog.seed(thumb.clone()).await;

        let app_state = TestAppStateBuilder::default()
            .with_catalog(catalog)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(set_thumbnail_handler))
                .await;

        let req = test::TestRequest::put()
            .uri(&format!("/media/thumbnail?id_media={}", thumb.id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ALREADY_THUMBNAIL");
    }
}
