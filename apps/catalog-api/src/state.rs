//! Application state management.
//!
//! The state holds the handles shared by every request: configuration, the
//! data-file store, and the stats cache the watcher invalidates.

use datastore::JsonFile;
use domain_stats::StatsCache;
use std::sync::Arc;

/// Shared application state; cloning is cheap (Arc pointer copies).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Handle to the JSON data file, shared by both domains
    pub store: Arc<JsonFile>,
    /// Stats snapshot cache, cleared when the data file changes
    pub stats_cache: Arc<StatsCache>,
}
