//! Error types for the country catalog
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Network Error ==
/// The single failure kind of an upstream fetch.
///
/// The store never distinguishes the variants; it only keeps the rendered
/// message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Request exceeded the adapter timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection could not be established or was dropped
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Upstream answered with a non-2xx status
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// Body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl NetworkError {
    /// Maps a reqwest failure onto the adapter's error kind.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout(timeout)
        } else if let Some(status) = err.status() {
            NetworkError::Status(status.as_u16())
        } else if err.is_decode() {
            NetworkError::Decode(err.to_string())
        } else {
            NetworkError::Connection(err.to_string())
        }
    }
}

// == API Error Enum ==
/// Error type returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Country or resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream country API failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<NetworkError> for ApiError {
    fn from(err: NetworkError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
