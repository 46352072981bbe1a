//! Items API routes
//!
//! Wires the items domain to HTTP routes over the shared data file.

use axum::Router;
use domain_items::{FileItemRepository, ItemService, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    let repository = FileItemRepository::new(Arc::clone(&state.store));
    let service = ItemService::new(repository);

    handlers::router(service)
}
