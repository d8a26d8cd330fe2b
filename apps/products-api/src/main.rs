//! Products API - REST server

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use products_api::{AppState, Config};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::sql::connect_from_config(config.database.clone()).await?;
    database::sql::run_migrations::<Migrator>(&db, "products-api").await?;

    let state = AppState::new(db, &config.jwt);
    let app = products_api::app(&state);

    info!("Starting Products API on port {}", config.server.port);

    let db = state.db.clone();
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            if let Err(e) = database::sql::close(db).await {
                tracing::error!("Failed to close database: {}", e);
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
