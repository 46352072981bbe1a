//! Stats Domain
//!
//! Aggregate statistics (item count, average price) over the catalog data
//! file, cached in memory until the file changes.
//!
//! The cache is invalidated from two directions: a background watcher polls
//! the file's modification time, and the read path revalidates against the
//! current modification time so a request landing between polls never sees
//! a stale snapshot.

pub mod cache;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod watcher;

// Re-export commonly used types
pub use cache::{CachedStats, StatsCache};
pub use error::{StatsError, StatsResult};
pub use handlers::ApiDoc;
pub use models::{StatsResponse, StatsSnapshot};
pub use service::StatsService;
pub use watcher::spawn_invalidation_watcher;
