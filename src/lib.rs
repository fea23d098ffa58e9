pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use std::error::Error;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::FoodService;
use crate::domain::ports::DocumentStore;
use crate::errors::AppError;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// The service as shared by every handler.
pub type AppService = FoodService<Arc<dyn DocumentStore>>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Registers the API routes and the JSON/query extractor error handlers.
///
/// Expects a `web::Data<AppService>` to be registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .route("/", web::get().to(handlers::root::index))
    .route("/test", web::get().to(handlers::root::diagnostics))
    .service(
        web::resource("/restaurants")
            .route(web::get().to(handlers::restaurants::list_restaurants))
            .route(web::post().to(handlers::restaurants::create_restaurant)),
    )
    .service(
        web::resource("/menu")
            .route(web::get().to(handlers::menu::list_menu))
            .route(web::post().to(handlers::menu::create_menu_item)),
    )
    .service(web::resource("/orders").route(web::post().to(handlers::orders::create_order)));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: AppService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(service);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
