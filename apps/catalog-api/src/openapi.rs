//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "REST API for browsing and extending the item catalog"
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc),
        (path = "/api/stats", api = domain_stats::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Catalog item endpoints"),
        (name = "Stats", description = "Catalog statistics endpoint")
    )
)]
pub struct ApiDoc;
