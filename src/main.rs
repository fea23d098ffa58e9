use std::io;
use std::sync::Arc;

use dotenvy::dotenv;
use food_delivery_api::application::FoodService;
use food_delivery_api::config::Settings;
use food_delivery_api::domain::ports::DocumentStore;
use food_delivery_api::infrastructure::{DieselDocumentStore, InMemoryDocumentStore};
use food_delivery_api::{build_server, create_pool, run_migrations};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let store: Arc<dyn DocumentStore> = match &settings.database_url {
        Some(url) => {
            let pool = create_pool(url, settings.pool_size).map_err(io::Error::other)?;
            run_migrations(&pool).map_err(io::Error::other)?;
            Arc::new(DieselDocumentStore::new(pool))
        }
        None => {
            log::warn!("DATABASE_URL is not set, records are kept in memory only");
            Arc::new(InMemoryDocumentStore::new())
        }
    };

    log::info!(
        "Starting server at http://{}:{} ({} store)",
        settings.host,
        settings.port,
        store.kind()
    );

    build_server(FoodService::new(store), &settings.host, settings.port)?.await
}
