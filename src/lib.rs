//! Country Catalog - A cached catalog of country data
//!
//! Fetches country records from a REST API into a normalized store and
//! serves filtered, ranked and related views of them.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod preferences;
pub mod store;
pub mod tasks;
pub mod view;

pub use api::AppState;
pub use config::Config;
pub use store::Catalog;
pub use tasks::spawn_refresh_task;
