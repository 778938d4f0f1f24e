//! Landing view: the most populated countries, in carousel order.

use serde::Serialize;

use crate::store::{CountryStore, FetchStatus};
use crate::view::{most_populated, CountrySummary, MOST_POPULATED_COUNT};

#[derive(Debug, Clone, Serialize)]
pub struct RankedCountry {
    /// 1-based rank
    pub rank: usize,
    #[serde(flatten)]
    pub country: CountrySummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub status: FetchStatus,
    /// True while the carousel has nothing to show and no bulk fetch has settled
    pub loading: bool,
    pub total_countries: usize,
    pub most_populated: Vec<RankedCountry>,
}

pub fn derive_landing(store: &CountryStore) -> LandingPage {
    let slides: Vec<RankedCountry> = most_populated(store.items(), MOST_POPULATED_COUNT)
        .into_iter()
        .enumerate()
        .map(|(i, country)| RankedCountry {
            rank: i + 1,
            country: CountrySummary::from(country),
        })
        .collect();

    LandingPage {
        status: store.status(),
        loading: !store.status().is_settled() && slides.is_empty(),
        total_countries: store.items().len(),
        most_populated: slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::country;

    #[test]
    fn test_empty_store_is_loading() {
        let page = derive_landing(&CountryStore::new());
        assert!(page.loading);
        assert!(page.most_populated.is_empty());
    }

    #[test]
    fn test_bulk_failure_is_not_loading() {
        let mut store = CountryStore::new();
        store.begin_bulk();
        store.fail_bulk("Connection failed: refused");

        let page = derive_landing(&store);
        assert!(!page.loading);
        assert_eq!(page.status, FetchStatus::Failed);
    }

    #[test]
    fn test_ranks_start_at_one() {
        let mut store = CountryStore::new();
        store.begin_bulk();
        store.complete_bulk(vec![
            country("FRA", "France", "Europe", 67),
            country("IND", "India", "Asia", 1400),
        ]);

        let page = derive_landing(&store);
        assert!(!page.loading);
        assert_eq!(page.most_populated[0].rank, 1);
        assert_eq!(page.most_populated[0].country.code, "IND");
        assert_eq!(page.most_populated[1].country.code, "FRA");
    }
}
