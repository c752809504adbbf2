use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // The client connects lazily, so startup succeeds even while the
    // database is unreachable. Without a URL the service still runs and
    // reports the store as unavailable.
    let mongo_client = match &config.mongodb {
        Some(mongodb) => {
            info!("Using MongoDB database: {}", mongodb.database());
            Some(database::mongodb::connect_lazy(mongodb).await?)
        }
        None => {
            warn!("No MongoDB URL configured, data endpoints will fail");
            None
        }
    };

    let db = match (&mongo_client, &config.mongodb) {
        (Some(client), Some(mongodb)) => Some(client.database(mongodb.database())),
        _ => None,
    };

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge root-level and health endpoints
    let app = router
        .merge(api::root_routes(&state))
        .merge(health_router(state.config.app.clone()));

    let server_config = state.config.server.clone();

    info!("Starting Karachi Couture API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connections");
        // MongoDB client closes automatically on drop
        drop(state.mongo_client);
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Karachi Couture API shutdown complete");
    Ok(())
}
