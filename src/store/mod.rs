//! Store Module
//!
//! Normalized country cache, its fetch lifecycles, and the shared catalog
//! context that drives them.

mod catalog;
mod countries;
mod stats;
mod status;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use catalog::Catalog;
pub use countries::{CountryStore, BULK_FAILURE_FALLBACK};
pub use stats::FetchStats;
pub use status::FetchStatus;

#[cfg(test)]
pub(crate) use catalog::testing;
