//! Item Service - search, pagination, and validation

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{
    CreateItem, Item, ItemQuery, ListMode, ListResponse, NewItem, PaginatedItems, Pagination,
};
use crate::repository::ItemRepository;

/// Item service providing the listing, lookup, and create operations.
///
/// The service re-reads the full collection from the repository on every
/// call; filtering and slicing happen in memory.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List items, optionally filtered by a search query.
    ///
    /// A positive `limit` parameter selects the legacy bare-array shape;
    /// otherwise the result is paginated.
    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ItemQuery) -> ItemResult<ListResponse> {
        let items = self.repository.read_all().await?;

        let filtered = match query.q.as_deref() {
            Some(q) if !q.is_empty() => search(items, q),
            _ => items,
        };

        Ok(match query.mode() {
            ListMode::Legacy { limit } => {
                ListResponse::Legacy(filtered.into_iter().take(limit).collect())
            }
            ListMode::Paginated { page, page_size } => {
                ListResponse::Paginated(paginate(filtered, page, page_size))
            }
        })
    }

    /// Get an item by id.
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        let items = self.repository.read_all().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(ItemError::NotFound { id })
    }

    /// Validate and persist a new item.
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let new_item = validate(input)?;
        self.repository.append(new_item).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Case-insensitive substring filter over name and category.
fn search(items: Vec<Item>, query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Slice the filtered collection into one page.
///
/// An empty result still reports one (empty) page, and an out-of-range
/// page request is clamped to the last page rather than rejected.
fn paginate(items: Vec<Item>, requested_page: usize, page_size: usize) -> PaginatedItems {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = requested_page.clamp(1, total_pages);

    let data: Vec<Item> = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    PaginatedItems {
        data,
        pagination: Pagination {
            page,
            page_size,
            total_items,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    }
}

/// Check the create payload field by field.
///
/// Order matters: name, then category, then price, each with its own
/// message. Name and category are trimmed before both the emptiness check
/// and persistence.
fn validate(input: CreateItem) -> ItemResult<NewItem> {
    let name = match input.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(ItemError::Validation(
                "Name is required and must be a non-empty string".to_string(),
            ));
        }
    };

    let category = match input.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => category.to_string(),
        _ => {
            return Err(ItemError::Validation(
                "Category is required and must be a non-empty string".to_string(),
            ));
        }
    };

    let price = match input.price {
        Some(price) if price >= 0.0 => price,
        _ => {
            return Err(ItemError::Validation(
                "Price is required and must be a non-negative number".to_string(),
            ));
        }
    };

    Ok(NewItem {
        name,
        category,
        price,
    })
}
