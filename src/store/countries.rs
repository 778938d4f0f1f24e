//! Country Store Module
//!
//! Normalized cache of country records with independent bulk and per-code
//! fetch lifecycles. All mutation goes through the transition methods below.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::Country;
use crate::store::{FetchStats, FetchStatus};

/// Message stored when a bulk failure carries no message of its own.
pub const BULK_FAILURE_FALLBACK: &str = "Failed to load countries";

// == Country Store ==
/// Normalized country cache.
#[derive(Debug, Default)]
pub struct CountryStore {
    /// Bulk collection in server order, plus individually fetched records
    items: Vec<Country>,
    /// Code to record, union of bulk and individual fetches
    by_code: HashMap<String, Country>,
    /// Bulk fetch status
    status: FetchStatus,
    /// Per-code fetch status
    individual_status: HashMap<String, FetchStatus>,
    /// Last bulk error message
    error: Option<String>,
    /// Time of the last successful bulk fetch
    last_fetched_at: Option<DateTime<Utc>>,
    /// Fetch counters
    stats: FetchStats,
    /// Bumped on every transition
    version: u64,
}

impl CountryStore {
    // == Constructor ==
    /// Creates an empty store with both machines idle.
    pub fn new() -> Self {
        Self::default()
    }

    // == Bulk: Pending ==
    /// Marks the bulk fetch as in flight and clears the last error.
    pub fn begin_bulk(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
        self.stats.record_bulk_request();
        self.bump();
    }

    // == Bulk: Fulfilled ==
    /// Replaces `items` wholesale and upserts every record into `by_code`.
    pub fn complete_bulk(&mut self, countries: Vec<Country>) {
        for country in &countries {
            self.individual_status
                .insert(country.cca3.clone(), FetchStatus::Succeeded);
            self.by_code.insert(country.cca3.clone(), country.clone());
        }
        self.items = countries;
        self.status = FetchStatus::Succeeded;
        self.last_fetched_at = Some(Utc::now());
        self.bump();
    }

    // == Bulk: Rejected ==
    /// Records the failure; cached records are left untouched.
    pub fn fail_bulk(&mut self, message: &str) {
        let message = message.trim();
        self.status = FetchStatus::Failed;
        self.error = Some(if message.is_empty() {
            BULK_FAILURE_FALLBACK.to_string()
        } else {
            message.to_string()
        });
        self.stats.record_bulk_failure();
        self.bump();
    }

    // == Code: Pending ==
    pub fn begin_code(&mut self, code: &str) {
        self.individual_status
            .insert(code.to_string(), FetchStatus::Loading);
        self.stats.record_code_request();
        self.bump();
    }

    // == Code: Fulfilled ==
    /// Upserts the record and makes it visible in `items`.
    ///
    /// `requested` is the code the fetch was issued for; it is marked
    /// succeeded alongside the record's own code.
    pub fn complete_code(&mut self, requested: &str, country: Country) {
        let code = country.cca3.clone();

        match self.items.iter_mut().find(|c| c.cca3 == code) {
            Some(existing) => *existing = country.clone(),
            None => self.items.push(country.clone()),
        }
        self.by_code.insert(code.clone(), country);

        self.individual_status
            .insert(requested.to_string(), FetchStatus::Succeeded);
        self.individual_status.insert(code, FetchStatus::Succeeded);
        self.bump();
    }

    // == Code: Rejected ==
    pub fn fail_code(&mut self, code: &str) {
        self.individual_status
            .insert(code.to_string(), FetchStatus::Failed);
        self.stats.record_code_failure();
        self.bump();
    }

    // == Readers ==
    pub fn items(&self) -> &[Country] {
        &self.items
    }

    pub fn get(&self, code: &str) -> Option<&Country> {
        self.by_code.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Per-code status; codes never requested are `Idle`.
    pub fn individual_status(&self, code: &str) -> FetchStatus {
        self.individual_status
            .get(code)
            .copied()
            .unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.last_fetched_at
    }

    pub fn stats(&self) -> FetchStats {
        self.stats.clone()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of distinct cached records.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}
