//! Client Module
//!
//! Outbound access to the upstream country API.

mod countries;
mod http;

pub use countries::{CountryApi, RestCountries};
pub use http::HttpClient;
