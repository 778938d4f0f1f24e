//! Country record as served by the upstream API
//!
//! Optional upstream fields are `Option`s in a fixed schema; the shape is
//! checked once at decode time by [`Country::validate`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// Fields requested from the upstream API for every record.
pub const COUNTRY_FIELDS: [&str; 10] = [
    "name",
    "flags",
    "cca3",
    "region",
    "subregion",
    "capital",
    "population",
    "currencies",
    "languages",
    "borders",
];

/// Placeholder shown for absent display values.
pub const MISSING_VALUE: &str = "—";

// == Country ==
/// One nation, keyed by its 3-letter code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub flags: Flags,
    /// Unique 3-letter code
    pub cca3: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tld: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,
    /// Codes of neighbouring countries, resolved lazily
    #[serde(default)]
    pub borders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    pub official: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<BTreeMap<String, NativeName>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeName {
    pub official: String,
    pub common: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    pub svg: String,
    pub png: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Country {
    // == Validate ==
    /// Checks the record's key before it is allowed into the cache.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if is_country_code(&self.cca3) {
            Ok(())
        } else {
            Err(NetworkError::Decode(format!(
                "invalid country code '{}'",
                self.cca3
            )))
        }
    }

    /// Native-language common names, comma separated.
    pub fn native_names(&self) -> String {
        match &self.name.native_name {
            Some(names) if !names.is_empty() => names
                .values()
                .map(|n| n.common.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ => MISSING_VALUE.to_string(),
        }
    }

    /// Currencies rendered as `name (symbol)`.
    pub fn currencies_display(&self) -> String {
        match &self.currencies {
            Some(currencies) if !currencies.is_empty() => currencies
                .values()
                .map(|c| match &c.symbol {
                    Some(symbol) => format!("{} ({})", c.name, symbol),
                    None => c.name.clone(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            _ => MISSING_VALUE.to_string(),
        }
    }

    pub fn languages_display(&self) -> String {
        match &self.languages {
            Some(languages) if !languages.is_empty() => languages
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => MISSING_VALUE.to_string(),
        }
    }

    pub fn capital_display(&self) -> String {
        match &self.capital {
            Some(capital) if !capital.is_empty() => capital.join(", "),
            _ => MISSING_VALUE.to_string(),
        }
    }

    /// Alt text for the flag, falling back to "<name> flag".
    pub fn flag_alt(&self) -> String {
        self.flags
            .alt
            .clone()
            .unwrap_or_else(|| format!("{} flag", self.name.common))
    }
}

/// Returns true for exactly three ASCII letters.
pub fn is_country_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

// == One Or Many ==
/// Upstream `/alpha` answers with either a record or a one-element array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Normalizes both shapes to the first record, if any.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }
}
