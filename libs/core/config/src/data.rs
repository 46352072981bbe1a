use crate::{env_or_default, ConfigError, FromEnv};
use std::path::{Path, PathBuf};

/// Location of the flat JSON file that backs the catalog.
///
/// The file holds a top-level array of items and is the sole source of
/// truth; every request re-reads it from disk.
#[derive(Clone, Debug)]
pub struct DataConfig {
    pub path: PathBuf,
}

impl DataConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FromEnv for DataConfig {
    /// Reads from environment variables with defaults:
    /// - DATA_PATH: defaults to "data/items.json" (relative to the working directory)
    fn from_env() -> Result<Self, ConfigError> {
        let path = env_or_default("DATA_PATH", "data/items.json");
        Ok(Self { path: path.into() })
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/items.json"),
        }
    }
}
