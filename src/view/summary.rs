//! Card-sized projection of a country record.

use serde::Serialize;

use crate::models::Country;

/// What a listing card or carousel slide shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    pub population: u64,
    pub capital: String,
    pub flag: String,
    pub flag_alt: String,
}

impl From<&Country> for CountrySummary {
    fn from(country: &Country) -> Self {
        Self {
            code: country.cca3.clone(),
            name: country.name.common.clone(),
            region: country.region.clone(),
            subregion: country.subregion.clone(),
            population: country.population,
            capital: country.capital_display(),
            flag: country.flags.png.clone(),
            flag_alt: country.flag_alt(),
        }
    }
}
