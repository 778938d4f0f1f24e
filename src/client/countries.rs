//! Country API
//!
//! The two upstream operations the catalog needs, behind a trait so the
//! store can be driven without a network.

use async_trait::async_trait;
use tracing::info;

use crate::client::HttpClient;
use crate::error::NetworkError;
use crate::models::{Country, OneOrMany, COUNTRY_FIELDS};

/// Source of country records.
#[async_trait]
pub trait CountryApi: Send + Sync {
    /// Fetches the entire collection, in server order.
    async fn fetch_all(&self) -> Result<Vec<Country>, NetworkError>;

    /// Fetches exactly one country by code.
    async fn fetch_by_code(&self, code: &str) -> Result<Country, NetworkError>;
}

// == Rest Countries ==
/// `CountryApi` backed by the REST Countries v3.1 endpoints.
#[derive(Debug, Clone)]
pub struct RestCountries {
    client: HttpClient,
    fields: String,
}

impl RestCountries {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            fields: COUNTRY_FIELDS.join(","),
        }
    }
}

#[async_trait]
impl CountryApi for RestCountries {
    async fn fetch_all(&self) -> Result<Vec<Country>, NetworkError> {
        let countries: Vec<Country> = self
            .client
            .get("/all", &[("fields", self.fields.as_str())])
            .await?;

        for country in &countries {
            country.validate()?;
        }

        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, NetworkError> {
        let body: OneOrMany<Country> = self
            .client
            .get(&format!("/alpha/{}", code), &[("fields", self.fields.as_str())])
            .await?;

        let country = body
            .into_first()
            .ok_or_else(|| NetworkError::Decode(format!("empty response for '{}'", code)))?;
        country.validate()?;

        Ok(country)
    }
}
