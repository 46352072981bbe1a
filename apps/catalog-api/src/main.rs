use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use datastore::JsonFile;
use domain_stats::StatsCache;
use std::sync::Arc;
use tracing::info;

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

    info!("Serving catalog from {}", config.data.path().display());

    let store = Arc::new(JsonFile::new(config.data.path()));
    let stats_cache = Arc::new(StatsCache::new());

    // A data file that cannot be stat-ed at startup is fatal; nothing this
    // service does can succeed without it.
    let _watcher =
        domain_stats::spawn_invalidation_watcher(Arc::clone(&store), Arc::clone(&stats_cache))
            .map_err(|e| {
                eyre::eyre!(
                    "Failed to watch data file {}: {e}",
                    config.data.path().display()
                )
            })?;

    // Initialize the application state
    let state = AppState {
        config,
        store,
        stats_cache,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs, tracing, and CORS
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge the liveness endpoint
    let app = router.merge(health_router(state.config.app));

    info!("Starting catalog API");

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
