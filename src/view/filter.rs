//! Filter predicate shared by every listing.

use crate::models::Country;

/// Regions offered by the listing's region selector.
pub const REGIONS: [&str; 6] = ["Africa", "Americas", "Asia", "Europe", "Oceania", "Antarctic"];

// == Country Filter ==
/// Name search plus region selection. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    query: String,
    region: String,
}

impl CountryFilter {
    pub fn new(query: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            region: region.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// True when either dimension narrows the result.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || !self.region.is_empty()
    }

    /// Case-insensitive substring match on the common name, conjunctive with
    /// exact region equality.
    pub fn matches(&self, country: &Country) -> bool {
        let needle = self.query.trim().to_lowercase();
        let name_matches =
            needle.is_empty() || country.name.common.to_lowercase().contains(&needle);
        let region_matches = self.region.is_empty() || country.region == self.region;
        name_matches && region_matches
    }

    /// Matching records, in input order.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        countries.iter().filter(|c| self.matches(c)).collect()
    }

    /// Message shown when nothing matches, worded after the active dimensions.
    pub fn no_results_message(&self) -> String {
        let query = self.query.trim();
        match (query.is_empty(), self.region.is_empty()) {
            (false, false) => format!(
                "No countries match \"{}\" in the {} region.",
                query, self.region
            ),
            (false, true) => format!("No countries match \"{}\".", query),
            (true, false) => format!("No countries found in the {} region.", self.region),
            (true, true) => "No countries match your search criteria.".to_string(),
        }
    }
}
