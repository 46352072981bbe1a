//! Stats Service - snapshot computation and cache management

use datastore::JsonFile;
use domain_items::Item;
use std::sync::Arc;
use tracing::instrument;

use crate::cache::StatsCache;
use crate::error::StatsResult;
use crate::models::{StatsResponse, StatsSnapshot};

/// Computes catalog statistics, serving from the cache when the data file
/// has not changed since the snapshot was taken.
///
/// The stats path reads the data file independently of the items domain;
/// there is no shared in-memory collection between the two.
#[derive(Clone)]
pub struct StatsService {
    file: Arc<JsonFile>,
    cache: Arc<StatsCache>,
}

impl StatsService {
    pub fn new(file: Arc<JsonFile>, cache: Arc<StatsCache>) -> Self {
        Self { file, cache }
    }

    /// Serve the current statistics.
    ///
    /// The cached snapshot is only used while the file's modification time
    /// still matches the one observed at computation; a mismatch means a
    /// write landed since (possibly between watcher polls) and forces a
    /// recompute.
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> StatsResult<StatsResponse> {
        let mtime = self.file.modified()?;

        if let Some(entry) = self.cache.get() {
            if entry.file_mtime == mtime {
                return Ok(StatsResponse::cached(entry.snapshot, entry.cached_at));
            }
        }

        let items: Vec<Item> = self.file.read_all().await?;
        let snapshot = StatsSnapshot::compute(&items);
        self.cache.set(snapshot, mtime);

        tracing::debug!(total = snapshot.total, "stats snapshot recomputed");
        Ok(StatsResponse::fresh(snapshot))
    }
}
