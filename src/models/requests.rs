//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

use crate::preferences::Theme;

/// Longest accepted search text
pub const MAX_QUERY_LENGTH: usize = 100;

/// Query string for the listing view (GET /countries)
///
/// # Fields
/// - `q`: Case-insensitive name search
/// - `region`: Exact region match
/// - `reveals`: How many times the trailing sentinel has become visible
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub reveals: Option<usize>,
}

impl ListQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match &self.q {
            Some(q) if q.chars().count() > MAX_QUERY_LENGTH => Some(format!(
                "Search text exceeds maximum length of {} characters",
                MAX_QUERY_LENGTH
            )),
            _ => None,
        }
    }
}

/// Request body for setting the display preference (PUT /theme)
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}
