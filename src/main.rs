use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use library::server::{
    config::Config,
    representation::{property_mapping::PropertyMappingRegistry, uri::ResourceUriBuilder},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_database(&db).await?;

    // Built once, read-only from here on; handlers share it through the state.
    let mapping_registry = Arc::new(PropertyMappingRegistry::new());
    let uri_builder = Arc::new(ResourceUriBuilder::new(config.app_url.clone()));

    let app = router::router()
        .with_state(AppState::new(db, mapping_registry, uri_builder))
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
