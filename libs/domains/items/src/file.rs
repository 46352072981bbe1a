//! File-backed implementation of ItemRepository

use async_trait::async_trait;
use chrono::Utc;
use datastore::JsonFile;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, NewItem};
use crate::repository::ItemRepository;

/// Repository over the flat JSON data file.
///
/// Every call re-reads the file; there is no in-memory copy of the
/// collection. Appends run under the store's write lock so concurrent
/// creates cannot lose each other's writes.
pub struct FileItemRepository {
    file: Arc<JsonFile>,
}

impl FileItemRepository {
    pub fn new(file: Arc<JsonFile>) -> Self {
        Self { file }
    }
}

#[async_trait]
impl ItemRepository for FileItemRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> ItemResult<Vec<Item>> {
        Ok(self.file.read_all().await?)
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn append(&self, input: NewItem) -> ItemResult<Item> {
        let _guard = self.file.lock_for_update().await;

        let mut items: Vec<Item> = self.file.read_all().await?;
        let item = Item {
            id: next_id(&items),
            name: input.name,
            category: input.category,
            price: input.price,
        };
        items.push(item.clone());
        self.file.write_all(&items).await?;

        tracing::info!(item_id = item.id, "Item created successfully");
        Ok(item)
    }
}

/// Derive the next id from wall-clock milliseconds, bumped past the largest
/// existing id so back-to-back creates within one millisecond still get
/// distinct, increasing ids.
fn next_id(items: &[Item]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let max_existing = items.iter().map(|item| item.id).max().unwrap_or(0);
    now.max(max_existing + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
            category: "Test".to_string(),
            price: 1.0,
        }
    }

    #[test]
    fn test_next_id_tracks_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let id = next_id(&[]);
        assert!(id >= before);
    }

    #[test]
    fn test_next_id_bumps_past_existing_ids() {
        let far_future = Utc::now().timestamp_millis() + 60_000;
        let id = next_id(&[item(1), item(far_future)]);
        assert_eq!(id, far_future + 1);
    }

    #[test]
    fn test_next_id_is_strictly_increasing() {
        let mut items = Vec::new();
        let mut last = 0;
        for _ in 0..5 {
            let id = next_id(&items);
            assert!(id > last);
            last = id;
            items.push(item(id));
        }
    }
}
