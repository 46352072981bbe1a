use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use crate::models::StatsSnapshot;

/// One cached computation.
#[derive(Debug, Clone, Copy)]
pub struct CachedStats {
    pub snapshot: StatsSnapshot,
    /// When the snapshot was computed
    pub cached_at: DateTime<Utc>,
    /// Modification time of the data file at computation; used by the read
    /// path to detect writes that landed between watcher polls
    pub file_mtime: SystemTime,
}

/// Mutex-guarded holder for the current stats snapshot.
///
/// Touched from the request path (get/set) and from the file watcher
/// (invalidate), so all access goes through the lock.
#[derive(Debug, Default)]
pub struct StatsCache {
    inner: Mutex<Option<CachedStats>>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<CachedStats> {
        *self.lock()
    }

    /// Store a freshly computed snapshot, stamping the computation time.
    pub fn set(&self, snapshot: StatsSnapshot, file_mtime: SystemTime) -> CachedStats {
        let entry = CachedStats {
            snapshot,
            cached_at: Utc::now(),
            file_mtime,
        };
        *self.lock() = Some(entry);
        entry
    }

    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CachedStats>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
