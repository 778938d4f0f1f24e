//! Fetch Statistics Module
//!
//! Tracks how many upstream fetches the store has absorbed and how many failed.

use serde::Serialize;

// == Fetch Stats ==
/// Counters for the bulk and per-code fetch lifecycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchStats {
    /// Number of bulk fetches started
    pub bulk_requests: u64,
    /// Number of bulk fetches that failed
    pub bulk_failures: u64,
    /// Number of per-code fetches started
    pub code_requests: u64,
    /// Number of per-code fetches that failed
    pub code_failures: u64,
}

impl FetchStats {
    // == Constructor ==
    /// Creates a new FetchStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Failure Rate ==
    /// Calculates the share of fetches that failed.
    ///
    /// Returns failures / requests over both lifecycles, or 0.0 if nothing was fetched.
    pub fn failure_rate(&self) -> f64 {
        let requests = self.bulk_requests + self.code_requests;
        if requests == 0 {
            0.0
        } else {
            (self.bulk_failures + self.code_failures) as f64 / requests as f64
        }
    }

    pub fn record_bulk_request(&mut self) {
        self.bulk_requests += 1;
    }

    pub fn record_bulk_failure(&mut self) {
        self.bulk_failures += 1;
    }

    pub fn record_code_request(&mut self) {
        self.code_requests += 1;
    }

    pub fn record_code_failure(&mut self) {
        self.code_failures += 1;
    }
}
