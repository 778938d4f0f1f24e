//! Detail View
//!
//! One country by code, with its border section.

use serde::Serialize;

use crate::models::{Country, MISSING_VALUE};
use crate::store::{CountryStore, FetchStatus, BULK_FAILURE_FALLBACK};
use crate::view::CountrySummary;

/// Shown when a lookup fails without a bulk error to report.
pub const NOT_FOUND_MESSAGE: &str = "The requested country could not be found.";

/// One neighbour in the border section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderEntry {
    pub code: String,
    /// Present once the neighbour's record is cached; otherwise only the code is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountrySummary>,
    /// The neighbour is the country being viewed
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderSection {
    pub loading: bool,
    pub entries: Vec<BorderEntry>,
}

impl BorderSection {
    pub fn build(store: &CountryStore, country: &Country, current: &str, loading: bool) -> Self {
        let entries = country
            .borders
            .iter()
            .map(|code| BorderEntry {
                code: code.clone(),
                country: store.get(code).map(CountrySummary::from),
                current: code == current,
            })
            .collect();

        Self { loading, entries }
    }
}

/// Full detail of a cached country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDetail {
    pub code: String,
    pub name: String,
    pub official_name: String,
    pub native_names: String,
    pub population: u64,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub currencies: String,
    pub languages: String,
    pub flag: String,
    pub flag_alt: String,
    pub borders: BorderSection,
}

/// Derived state of the detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailPage {
    Loading,
    Failed {
        message: String,
        /// The bulk fetch failed; the record may exist upstream
        #[serde(skip)]
        upstream: bool,
    },
    Ready(Box<CountryDetail>),
}

// == Derive ==
/// Derives the detail page for `code` from the store.
///
/// `borders_loading` is the border resolver's flag for this record.
pub fn derive_detail(store: &CountryStore, code: &str, borders_loading: bool) -> DetailPage {
    let country = store.get(code);
    let individual = store.individual_status(code);

    if individual == FetchStatus::Loading
        || (store.status() == FetchStatus::Loading && country.is_none())
    {
        return DetailPage::Loading;
    }

    // Per-code failures stay local to the record
    if individual == FetchStatus::Failed
        || (country.is_none() && individual == FetchStatus::Succeeded)
    {
        return DetailPage::Failed {
            message: NOT_FOUND_MESSAGE.to_string(),
            upstream: false,
        };
    }

    if store.status() == FetchStatus::Failed && country.is_none() {
        return DetailPage::Failed {
            message: store.error().unwrap_or(BULK_FAILURE_FALLBACK).to_string(),
            upstream: true,
        };
    }

    match country {
        Some(country) => DetailPage::Ready(Box::new(CountryDetail {
            code: country.cca3.clone(),
            name: country.name.common.clone(),
            official_name: country.name.official.clone(),
            native_names: country.native_names(),
            population: country.population,
            region: country.region.clone(),
            subregion: country
                .subregion
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            capital: country.capital_display(),
            currencies: country.currencies_display(),
            languages: country.languages_display(),
            flag: country.flags.png.clone(),
            flag_alt: country.flag_alt(),
            borders: BorderSection::build(store, country, code, borders_loading),
        })),
        None => DetailPage::Loading,
    }
}
