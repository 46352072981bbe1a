use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::{StoreError, StoreResult};

/// Handle to the JSON file backing a collection.
///
/// Reads and writes always cover the full collection. Writes overwrite the
/// file in place with no partial-write protection; the pretty-printed
/// 2-space-indented format keeps the file hand-editable.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full collection.
    pub async fn read_all<T: DeserializeOwned>(&self) -> StoreResult<Vec<T>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&raw).map_err(StoreError::Corrupt)
    }

    /// Serialize the full collection and overwrite the file.
    pub async fn write_all<T: Serialize>(&self, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(items).map_err(StoreError::Corrupt)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    /// Acquire the write lock for a read-modify-write cycle.
    ///
    /// Hold the guard across the read, the in-memory mutation, and the
    /// write-back; otherwise two concurrent writers race and the last
    /// write wins.
    pub async fn lock_for_update(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// The file's current modification time.
    pub fn modified(&self) -> StoreResult<SystemTime> {
        Ok(std::fs::metadata(&self.path)?.modified()?)
    }
}
