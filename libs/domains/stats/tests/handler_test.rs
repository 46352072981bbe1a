//! Handler tests for the Stats domain
//!
//! These drive the stats router over a temporary data file and verify the
//! cache lifecycle: fresh computation, cache hits with a stable timestamp,
//! and recomputation after the file changes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use datastore::JsonFile;
use domain_stats::{StatsCache, StatsService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::TestDataFile;
use tower::ServiceExt; // For oneshot()

fn app(data: &TestDataFile) -> Router {
    let file = Arc::new(JsonFile::new(data.path()));
    let cache = Arc::new(StatsCache::new());
    let service = StatsService::new(file, cache);
    handlers::router(service)
}

async fn get_stats(router: &Router) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn priced_items() -> Value {
    json!([
        { "id": 1, "name": "A", "category": "X", "price": 10.0 },
        { "id": 2, "name": "B", "category": "X", "price": 20.0 },
        { "id": 3, "name": "C", "category": "Y", "price": 30.0 }
    ])
}

#[tokio::test]
async fn test_first_request_computes_fresh_stats() {
    let data = TestDataFile::with_items(priced_items());
    let router = app(&data);

    let (status, body) = get_stats(&router).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["averagePrice"], 20.0);
    assert_eq!(body["cached"], false);
    assert!(body.get("cachedAt").is_none());
}

#[tokio::test]
async fn test_repeated_requests_hit_the_cache_with_stable_timestamp() {
    let data = TestDataFile::with_items(priced_items());
    let router = app(&data);

    let (_, first) = get_stats(&router).await;
    assert_eq!(first["cached"], false);

    let (_, second) = get_stats(&router).await;
    assert_eq!(second["cached"], true);
    let timestamp = second["cachedAt"].as_str().unwrap().to_string();

    let (_, third) = get_stats(&router).await;
    assert_eq!(third["cached"], true);
    assert_eq!(third["cachedAt"].as_str().unwrap(), timestamp);
}

#[tokio::test]
async fn test_file_modification_forces_recompute() {
    let data = TestDataFile::with_items(priced_items());
    let router = app(&data);

    let (_, _) = get_stats(&router).await;
    let (_, warm) = get_stats(&router).await;
    assert_eq!(warm["cached"], true);
    let old_timestamp = warm["cachedAt"].as_str().unwrap().to_string();

    // External edit: no watcher is running here, so this exercises the
    // read-path revalidation alone.
    data.write_raw(
        &serde_json::to_string_pretty(&json!([
            { "id": 1, "name": "A", "category": "X", "price": 100.0 }
        ]))
        .unwrap(),
    );

    let (_, recomputed) = get_stats(&router).await;
    assert_eq!(recomputed["cached"], false);
    assert_eq!(recomputed["total"], 1);
    assert_eq!(recomputed["averagePrice"], 100.0);

    let (_, rewarmed) = get_stats(&router).await;
    assert_eq!(rewarmed["cached"], true);
    assert_ne!(rewarmed["cachedAt"].as_str().unwrap(), old_timestamp);
}

#[tokio::test]
async fn test_empty_collection_reports_zero_average() {
    let data = TestDataFile::empty();
    let router = app(&data);

    let (status, body) = get_stats(&router).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["averagePrice"], 0.0);
}

#[tokio::test]
async fn test_corrupt_data_file_is_500() {
    let data = TestDataFile::with_items(priced_items());
    data.write_raw("not valid json");
    let router = app(&data);

    let (status, body) = get_stats(&router).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Invalid JSON in data file");
}
