//! Data Models Module
//!
//! The country record decoded from upstream, plus request and response DTOs
//! for the catalog's HTTP surface.

mod country;
mod requests;
mod responses;

pub use country::*;
pub use requests::*;
pub use responses::*;

#[cfg(test)]
pub(crate) use country::fixtures;
