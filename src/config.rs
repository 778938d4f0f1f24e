//! Configuration Module
//!
//! Handles loading and managing catalog configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default upstream country API
pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Catalog configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the upstream country API
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between background bulk refreshes, 0 disables
    pub refresh_interval: u64,
    /// File holding the persisted display preference
    pub theme_file: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Upstream API address (default: restcountries v3.1)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 15)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REFRESH_INTERVAL` - Background refresh in seconds (default: 0, disabled)
    /// - `THEME_FILE` - Display preference file (default: theme.json)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            refresh_interval: env::var("REFRESH_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_interval),
            theme_file: env::var("THEME_FILE")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.theme_file),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: 15,
            server_port: 3000,
            refresh_interval: 0,
            theme_file: PathBuf::from("theme.json"),
        }
    }
}
