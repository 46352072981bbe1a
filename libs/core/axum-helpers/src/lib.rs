//! # Axum Helpers
//!
//! Shared infrastructure for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: the `{error, stack?}` response envelope and fallback handlers
//! - **[`http`]**: CORS layer configuration
//! - **[`server`]**: router assembly, health endpoint, startup and graceful shutdown

pub mod errors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use http::create_cors_layer;
pub use server::{
    HealthResponse, create_app, create_router, health_router, shutdown_signal,
};
