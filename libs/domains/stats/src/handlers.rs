use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StatsResult;
use crate::models::{StatsResponse, StatsSnapshot};
use crate::service::StatsService;

/// OpenAPI documentation for the Stats API
#[derive(OpenApi)]
#[openapi(
    paths(get_stats),
    components(schemas(StatsResponse, StatsSnapshot, ErrorResponse)),
    tags(
        (name = "Stats", description = "Catalog statistics endpoint")
    )
)]
pub struct ApiDoc;

/// Create the stats router
pub fn router(service: StatsService) -> Router {
    Router::new()
        .route("/", get(get_stats))
        .with_state(Arc::new(service))
}

/// Aggregate statistics over the catalog
#[utoipa::path(
    get,
    path = "",
    tag = "Stats",
    responses(
        (status = 200, description = "Item count and average price", body = StatsResponse),
        (status = 500, description = "Data file unreadable or corrupt", body = ErrorResponse)
    )
)]
async fn get_stats(State(service): State<Arc<StatsService>>) -> StatsResult<Json<StatsResponse>> {
    let stats = service.get_stats().await?;
    Ok(Json(stats))
}
