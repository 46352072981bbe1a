//! Stats API routes
//!
//! Wires the stats domain to HTTP routes; the service shares the data-file
//! handle and the cache that the invalidation watcher clears.

use axum::Router;
use domain_stats::{StatsService, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create stats router
pub fn router(state: &AppState) -> Router {
    let service = StatsService::new(Arc::clone(&state.store), Arc::clone(&state.stats_cache));

    handlers::router(service)
}
