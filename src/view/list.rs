//! Listing View
//!
//! Filtered, incrementally revealed country list. Search text, region and
//! the reveal cursor are local to the view; everything else is read from
//! the store.

use serde::Serialize;

use crate::store::{CountryStore, FetchStatus};
use crate::view::{CountryFilter, CountrySummary, Reveal, REGIONS};

/// Rendered listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub countries: Vec<CountrySummary>,
    /// Number of matches before the reveal cap
    pub total: usize,
    pub has_more: bool,
    pub query: String,
    pub region: String,
    pub regions: Vec<&'static str>,
    /// Bulk fetch status, drives the loading and retry states
    pub status: FetchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results: Option<String>,
}

// == List View ==
#[derive(Debug, Clone, Default)]
pub struct ListView {
    filter: CountryFilter,
    reveal: Reveal,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &CountryFilter {
        &self.filter
    }

    /// Replaces the filter; any change resets the reveal cursor.
    pub fn set_filter(&mut self, filter: CountryFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.reveal.reset();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let region = self.filter.region().to_string();
        self.set_filter(CountryFilter::new(query, region));
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        let query = self.filter.query().to_string();
        self.set_filter(CountryFilter::new(query, region));
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(CountryFilter::default());
        self.reveal.reset();
    }

    /// The trailing sentinel scrolled into view.
    pub fn reveal_more(&mut self, store: &CountryStore) -> bool {
        let total = self.match_count(store);
        self.reveal.reveal_more(total)
    }

    pub fn match_count(&self, store: &CountryStore) -> usize {
        store
            .items()
            .iter()
            .filter(|c| self.filter.matches(c))
            .count()
    }

    // == Render ==
    pub fn render(&self, store: &CountryStore) -> ListPage {
        let matches = self.filter.apply(store.items());
        let total = matches.len();
        let visible = self.reveal.visible(total);

        let no_results = (store.status() == FetchStatus::Succeeded
            && total == 0
            && self.filter.is_active())
        .then(|| self.filter.no_results_message());

        ListPage {
            countries: matches
                .into_iter()
                .take(visible)
                .map(CountrySummary::from)
                .collect(),
            total,
            has_more: self.reveal.has_more(total),
            query: self.filter.query().to_string(),
            region: self.filter.region().to_string(),
            regions: REGIONS.to_vec(),
            status: store.status(),
            error: store.error().map(str::to_string),
            no_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::country;
    use crate::models::Country;

    fn loaded_store(count: usize) -> CountryStore {
        let countries: Vec<Country> = (0..count)
            .map(|i| {
                let region = if i % 2 == 0 { "Europe" } else { "Asia" };
                country(&format!("C{:02}", i), &format!("Country {}", i), region, i as u64)
            })
            .collect();
        let mut store = CountryStore::new();
        store.begin_bulk();
        store.complete_bulk(countries);
        store
    }

    #[test]
    fn test_initial_render_shows_first_twelve() {
        let store = loaded_store(30);
        let page = ListView::new().render(&store);

        assert_eq!(page.countries.len(), 12);
        assert_eq!(page.total, 30);
        assert!(page.has_more);
        assert_eq!(page.countries[0].code, "C00");
        assert!(page.no_results.is_none());
    }

    #[test]
    fn test_reveal_grows_and_caps() {
        let store = loaded_store(30);
        let mut view = ListView::new();

        assert!(view.reveal_more(&store));
        assert_eq!(view.render(&store).countries.len(), 24);

        assert!(view.reveal_more(&store));
        let page = view.render(&store);
        assert_eq!(page.countries.len(), 30);
        assert!(!page.has_more);

        assert!(!view.reveal_more(&store));
    }

    #[test]
    fn test_filter_change_resets_reveal() {
        let store = loaded_store(60);
        let mut view = ListView::new();
        view.reveal_more(&store);
        view.reveal_more(&store);
        assert_eq!(view.render(&store).countries.len(), 36);

        view.set_region("Europe");
        let page = view.render(&store);
        assert_eq!(page.total, 30);
        assert_eq!(page.countries.len(), 12);
    }

    #[test]
    fn test_same_filter_keeps_reveal() {
        let store = loaded_store(30);
        let mut view = ListView::new();
        view.reveal_more(&store);

        view.set_query("");
        assert_eq!(view.render(&store).countries.len(), 24);
    }

    #[test]
    fn test_no_results_only_after_success() {
        let mut view = ListView::new();
        view.set_query("atlantis");

        let mut store = CountryStore::new();
        store.begin_bulk();
        assert!(view.render(&store).no_results.is_none());

        store.complete_bulk(vec![country("FRA", "France", "Europe", 1)]);
        assert_eq!(
            view.render(&store).no_results.as_deref(),
            Some("No countries match \"atlantis\".")
        );

        view.clear_filters();
        assert!(view.render(&store).no_results.is_none());
    }

    #[test]
    fn test_failed_status_surfaces_error() {
        let mut store = CountryStore::new();
        store.begin_bulk();
        store.fail_bulk("Request timed out after 15s");

        let page = ListView::new().render(&store);
        assert_eq!(page.status, FetchStatus::Failed);
        assert_eq!(page.error.as_deref(), Some("Request timed out after 15s"));
        assert!(page.countries.is_empty());
    }
}
