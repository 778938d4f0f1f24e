//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies that are not views.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::preferences::Theme;
use crate::store::{CountryStore, FetchStats, FetchStatus};

/// Response body for the store status endpoint (GET /status)
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: FetchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Records listed by the bulk-derived views
    pub items: usize,
    /// Distinct cached records
    pub cached: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fetched_at: Option<DateTime<Utc>>,
    pub stats: FetchStats,
    pub failure_rate: f64,
    pub version: u64,
}

impl StatusResponse {
    /// Snapshots the store's status fields
    pub fn from_store(store: &CountryStore) -> Self {
        let stats = store.stats();
        Self {
            status: store.status(),
            error: store.error().map(str::to_string),
            items: store.items().len(),
            cached: store.len(),
            last_fetched_at: store.last_fetched_at(),
            failure_rate: stats.failure_rate(),
            stats,
            version: store.version(),
        }
    }
}

/// Response body for an explicit bulk refresh (POST /countries/refresh)
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub message: String,
    pub count: usize,
}

impl RefreshResponse {
    pub fn new(count: usize) -> Self {
        Self {
            message: format!("Loaded {} countries", count),
            count,
        }
    }
}

/// Response body for the theme endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
