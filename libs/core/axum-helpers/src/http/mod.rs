//! HTTP middleware configuration.

use axum::http::{HeaderValue, Method, header};
use core_config::env_or_default;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Accepts a comma-separated list of origins; defaults to the front-end dev
/// server at `http://localhost:3000` when unset.
pub fn create_cors_layer() -> io::Result<CorsLayer> {
    let origins_str = env_or_default("CORS_ALLOWED_ORIGIN", "http://localhost:3000");

    let allowed_origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    tracing::info!("CORS configured with allowed origins: {}", origins_str);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_default_origin() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(create_cors_layer().is_ok());
        });
    }

    #[test]
    fn test_cors_layer_multiple_origins() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000,https://catalog.example.com"),
            || {
                assert!(create_cors_layer().is_ok());
            },
        );
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("not a header\u{7f}value"), || {
            assert!(create_cors_layer().is_err());
        });
    }
}
