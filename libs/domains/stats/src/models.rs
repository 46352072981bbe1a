use chrono::{DateTime, Utc};
use domain_items::Item;
use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate statistics over the full item collection.
///
/// Derived data only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Number of items in the collection
    pub total: usize,
    /// Mean price, rounded to 2 decimal places; 0 for an empty collection
    pub average_price: f64,
}

impl StatsSnapshot {
    pub fn compute(items: &[Item]) -> Self {
        if items.is_empty() {
            return Self {
                total: 0,
                average_price: 0.0,
            };
        }

        let total = items.len();
        let average = items.iter().map(|item| item.price).sum::<f64>() / total as f64;

        Self {
            total,
            average_price: round2(average),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Wire shape of the stats endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total: usize,
    pub average_price: f64,
    /// Whether this response was served from the in-memory snapshot
    pub cached: bool,
    /// When the served snapshot was computed; only present on cache hits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<DateTime<Utc>>,
}

impl StatsResponse {
    /// A response computed on this request.
    pub fn fresh(snapshot: StatsSnapshot) -> Self {
        Self {
            total: snapshot.total,
            average_price: snapshot.average_price,
            cached: false,
            cached_at: None,
        }
    }

    /// A response served from the cache.
    pub fn cached(snapshot: StatsSnapshot, cached_at: DateTime<Utc>) -> Self {
        Self {
            total: snapshot.total,
            average_price: snapshot.average_price,
            cached: true,
            cached_at: Some(cached_at),
        }
    }
}
