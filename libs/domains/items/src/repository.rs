use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, NewItem};

/// Repository trait for item persistence.
///
/// The backing collection is an ordered, append-only sequence; there are
/// no update or delete operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Read the full collection in insertion order
    async fn read_all(&self) -> ItemResult<Vec<Item>>;

    /// Assign an id to the validated payload and persist it at the end of
    /// the collection
    async fn append(&self, input: NewItem) -> ItemResult<Item>;
}
