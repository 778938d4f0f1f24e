//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Refresh: Prefetches the collection at startup and optionally re-fetches it periodically

mod refresh;

pub use refresh::spawn_refresh_task;
