pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::media;

use crate::api::openapi::ApiDoc;
use crate::media::adapter::incoming::web::routes;
use crate::media::adapter::outgoing::blob_storage::{
    BlobBackend, BlobConfig, LocalBlobStore, VercelBlobStore,
};
use crate::media::adapter::outgoing::db::MediaCatalogPostgres;
use crate::media::application::domain::policies::MediaPolicy;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::ports::outgoing::blob_storage::BlobStore;
use crate::shared::api::custom_query_config;

use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub media: MediaUseCases,
    pub media_policy: MediaPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting media service...");

    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let host = env::var("HOST").context("HOST is not set")?;
    let port = env::var("PORT").context("PORT is not set")?;
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    // Object storage
    let blob_config = BlobConfig::from_env().context("Invalid blob storage configuration")?;
    let (store, local_files): (Arc<dyn BlobStore>, Option<LocalBlobStore>) =
        match blob_config.backend {
            BlobBackend::Vercel { api_url, token } => {
                info!(api_url = %api_url, "Using Vercel blob storage");
                (Arc::new(VercelBlobStore::new(api_url, token)), None)
            }
            BlobBackend::Local { root, base_url } => {
                info!(root = %root.display(), "Using local file storage");
                let local = LocalBlobStore::new(root, base_url)
                    .await
                    .context("Failed to prepare local file storage")?;
                (Arc::new(local.clone()), Some(local))
            }
        };

    let media_policy = MediaPolicy::from_env();
    info!(
        max_file_size_bytes = media_policy.max_file_size_bytes,
        storage_timeout_secs = media_policy.storage_timeout.as_secs(),
        "Media policy loaded"
    );

    let catalog = Arc::new(MediaCatalogPostgres::new(Arc::clone(&db_arc)));
    let state = AppState {
        media: MediaUseCases::wire(catalog, store, media_policy.clone()),
        media_policy,
    };

    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes);

        if let Some(local) = &local_files {
            app = app
                .app_data(web::Data::new(local.clone()))
                .service(routes::serve_file_handler);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "scena media service" }))
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Media
    cfg.service(routes::upload_media_handler);
    cfg.service(routes::replace_media_handler);
    cfg.service(routes::delete_product_media_handler);
    cfg.service(routes::delete_media_handler);
    cfg.service(routes::get_thumbnail_handler);
    cfg.service(routes::set_thumbnail_handler);
    cfg.service(routes::list_media_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
