//! Shared test fixtures.
//!
//! [`TestDataFile`] gives each test its own temporary copy of the catalog
//! data file, so tests can mutate and corrupt it freely without touching
//! the repository's seed data or each other.

use serde_json::{Value, json};
use std::path::Path;
use tempfile::NamedTempFile;

/// A temporary catalog data file, deleted when dropped.
pub struct TestDataFile {
    file: NamedTempFile,
}

impl TestDataFile {
    /// A data file seeded with the default catalog fixture.
    pub fn new() -> Self {
        Self::with_items(default_items())
    }

    /// A data file holding the given top-level JSON array.
    pub fn with_items(items: Value) -> Self {
        let file = NamedTempFile::new().expect("failed to create temp data file");
        std::fs::write(file.path(), serde_json::to_string_pretty(&items).unwrap())
            .expect("failed to seed temp data file");
        Self { file }
    }

    /// A data file holding an empty collection.
    pub fn empty() -> Self {
        Self::with_items(json!([]))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Overwrite the file with arbitrary content (e.g. invalid JSON).
    pub fn write_raw(&self, content: &str) {
        std::fs::write(self.file.path(), content).expect("failed to overwrite temp data file");
    }

    /// Read the raw file content back.
    pub fn read_to_string(&self) -> String {
        std::fs::read_to_string(self.file.path()).expect("failed to read temp data file")
    }
}

impl Default for TestDataFile {
    fn default() -> Self {
        Self::new()
    }
}

/// The default fixture: a small catalog spanning two categories.
pub fn default_items() -> Value {
    json!([
        { "id": 1, "name": "Laptop Pro", "category": "Electronics", "price": 2499.0 },
        { "id": 2, "name": "Noise Cancelling Headphones", "category": "Electronics", "price": 399.0 },
        { "id": 3, "name": "Ultra-Wide Monitor", "category": "Electronics", "price": 999.0 },
        { "id": 4, "name": "Ergonomic Chair", "category": "Furniture", "price": 799.0 },
        { "id": 5, "name": "Standing Desk", "category": "Furniture", "price": 1199.0 }
    ])
}
