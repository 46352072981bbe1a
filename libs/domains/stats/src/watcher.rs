use datastore::{DEFAULT_POLL_INTERVAL, JsonFile, StoreResult, spawn_change_watcher};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::cache::StatsCache;

/// Spawn the background task that clears the stats cache whenever the data
/// file changes, whether the write came from this process or an external
/// edit.
///
/// Returns an error if the data file cannot be stat-ed; callers should
/// treat that as fatal at startup.
pub fn spawn_invalidation_watcher(
    file: Arc<JsonFile>,
    cache: Arc<StatsCache>,
) -> StoreResult<JoinHandle<()>> {
    spawn_change_watcher(file, DEFAULT_POLL_INTERVAL, move || {
        tracing::info!("Data file changed, invalidating stats cache");
        cache.invalidate();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatsSnapshot;
    use std::time::{Duration, SystemTime};
    use test_utils::TestDataFile;

    #[tokio::test]
    async fn test_watcher_setup_fails_on_missing_file() {
        let file = Arc::new(JsonFile::new("/nonexistent/items.json"));
        let cache = Arc::new(StatsCache::new());

        assert!(spawn_invalidation_watcher(file, cache).is_err());
    }

    #[tokio::test]
    async fn test_watcher_invalidates_on_file_change() {
        let data = TestDataFile::empty();
        let file = Arc::new(JsonFile::new(data.path()));
        let cache = Arc::new(StatsCache::new());

        let handle = spawn_invalidation_watcher(Arc::clone(&file), Arc::clone(&cache)).unwrap();

        cache.set(
            StatsSnapshot {
                total: 0,
                average_price: 0.0,
            },
            SystemTime::UNIX_EPOCH,
        );

        data.write_raw("[{\"id\":1,\"name\":\"x\",\"category\":\"y\",\"price\":1.0}]");
        tokio::time::sleep(DEFAULT_POLL_INTERVAL + Duration::from_millis(300)).await;

        assert!(cache.get().is_none());
        handle.abort();
    }
}
