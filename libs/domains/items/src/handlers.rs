use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemQuery, ListResponse, PaginatedItems, Pagination};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, get_item, create_item),
    components(schemas(
        Item,
        CreateItem,
        ItemQuery,
        Pagination,
        PaginatedItems,
        ListResponse,
        ErrorResponse
    )),
    tags(
        (name = "Items", description = "Catalog item endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item))
        .with_state(shared_service)
}

/// List items with optional search and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemQuery),
    responses(
        (status = 200, description = "Bare array (legacy, when limit is set) or paginated listing", body = ListResponse),
        (status = 500, description = "Data file unreadable or corrupt", body = ErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Query(query): Query<ItemQuery>,
) -> ItemResult<Json<ListResponse>> {
    let response = service.list_items(query).await?;
    Ok(Json(response))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
        (status = 500, description = "Data file unreadable or corrupt", body = ErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(raw_id): Path<String>,
) -> ItemResult<Json<Item>> {
    let id: i64 = raw_id.parse().map_err(|_| ItemError::InvalidId)?;
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Data file unreadable or corrupt", body = ErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Json(input): Json<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
