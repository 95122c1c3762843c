mod config;
mod error;
mod pages;
mod routes;
mod theme;
mod viewer;

use std::sync::Arc;

use config::AppConfig;
use routes::{app_router, AppState};
use scribble_core::services::DatabaseService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only load .env in development; production uses platform-native env injection.
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scribble_server=info".parse().expect("valid directive")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env()?);
    tracing::info!("Starting scribble-server with config: {:?}", config);

    let db = DatabaseService::open_path(&config.database_path)?;
    let state = AppState::new(config, db);
    let bind_addr = state.config.bind_addr.clone();
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("scribble-server listening on {}", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
