//! Items Domain
//!
//! Catalog items served from a flat JSON file: list with search and
//! pagination, fetch by id, and create.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Search, pagination, validation
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + file-backed implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use datastore::JsonFile;
//! use domain_items::{FileItemRepository, ItemService, handlers};
//!
//! let file = Arc::new(JsonFile::new("data/items.json"));
//! let repository = FileItemRepository::new(file);
//! let service = ItemService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod file;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use file::FileItemRepository;
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemQuery, ListResponse, NewItem, PaginatedItems, Pagination};
pub use repository::ItemRepository;
pub use service::ItemService;
