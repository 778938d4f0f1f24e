//! HTTP Client Adapter
//!
//! Thin wrapper over reqwest: fixed base address, bounded timeout, one
//! attempt per call, JSON decoding into the caller's type.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::NetworkError;

/// Upper bound on how much of an error body is kept for logging.
const MAX_LOGGED_BODY: usize = 200;

// == Http Client ==
/// Outbound client bound to one upstream base address.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    // == Constructor ==
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, NetworkError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Creates a client from the catalog configuration.
    pub fn from_config(config: &Config) -> Result<Self, NetworkError> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // == Get ==
    /// Performs a single GET against `base_url + path` and decodes the body.
    ///
    /// # Arguments
    /// * `path` - Path relative to the base address, with leading slash
    /// * `query` - Query pairs appended to the URL
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, NetworkError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, ?query, "Outbound request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = NetworkError::from_reqwest(e, self.timeout);
                warn!(url = %url, error = %err, "Request failed");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                url = %url,
                status = status.as_u16(),
                body = %body.chars().take(MAX_LOGGED_BODY).collect::<String>(),
                "Upstream returned error status"
            );
            return Err(NetworkError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NetworkError::from_reqwest(e, self.timeout))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(url = %url, error = %e, "Failed to decode response body");
            NetworkError::Decode(e.to_string())
        })
    }
}
