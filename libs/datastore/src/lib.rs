//! Flat-file persistence for the catalog.
//!
//! A [`JsonFile`] wraps a single JSON file holding a top-level array and is
//! the sole source of truth: callers read the whole collection, mutate it in
//! memory, and write the whole collection back. There is no indexing and no
//! transaction support. Read-modify-write cycles are serialized through the
//! store's write lock; external writers editing the file directly remain
//! unsynchronized.
//!
//! [`spawn_change_watcher`] polls the file's modification time so callers
//! can react to changes from any source (an own-process write or an external
//! edit).

pub mod error;
pub mod json_file;
pub mod watch;

pub use error::{StoreError, StoreResult};
pub use json_file::JsonFile;
pub use watch::{DEFAULT_POLL_INTERVAL, spawn_change_watcher};
