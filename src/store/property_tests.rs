//! Property-Based Tests for the Store Module
//!
//! Uses proptest to check the store invariants over arbitrary fetch sequences.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::models::{fixtures::country, Country};
use crate::store::{CountryStore, FetchStatus};

// == Strategies ==
/// Generates country codes from a small alphabet so collisions are common
fn code_strategy() -> impl Strategy<Value = String> {
    "[A-D]{3}"
}

const REGIONS: [&str; 4] = ["Africa", "Americas", "Asia", "Europe"];

fn country_strategy() -> impl Strategy<Value = Country> {
    (code_strategy(), "[a-z]{1,12}", 0..4usize, 0u64..1_000_000_000)
        .prop_map(|(code, name, region, population)| {
            country(&code, &name, REGIONS[region], population)
        })
}

/// Bulk payloads with unique codes, as the upstream API serves them
fn bulk_strategy() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(country_strategy(), 0..30).prop_map(|countries| {
        let mut seen = HashSet::new();
        countries
            .into_iter()
            .filter(|c| seen.insert(c.cca3.clone()))
            .collect()
    })
}

/// A fetch lifecycle event applied to the store
#[derive(Debug, Clone)]
enum FetchEvent {
    BulkSuccess(Vec<Country>),
    BulkFailure(String),
    CodeSuccess(Country),
    CodeFailure(String),
}

fn event_strategy() -> impl Strategy<Value = FetchEvent> {
    prop_oneof![
        bulk_strategy().prop_map(FetchEvent::BulkSuccess),
        "[a-z ]{0,20}".prop_map(FetchEvent::BulkFailure),
        country_strategy().prop_map(FetchEvent::CodeSuccess),
        code_strategy().prop_map(FetchEvent::CodeFailure),
    ]
}

fn apply(store: &mut CountryStore, event: FetchEvent) {
    match event {
        FetchEvent::BulkSuccess(countries) => {
            store.begin_bulk();
            store.complete_bulk(countries);
        }
        FetchEvent::BulkFailure(message) => {
            store.begin_bulk();
            store.fail_bulk(&message);
        }
        FetchEvent::CodeSuccess(country) => {
            let code = country.cca3.clone();
            store.begin_code(&code);
            store.complete_code(&code, country);
        }
        FetchEvent::CodeFailure(code) => {
            store.begin_code(&code);
            store.fail_code(&code);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // After a successful bulk fetch every listed code is cached and succeeded.
    #[test]
    fn prop_bulk_success_indexes_every_item(countries in bulk_strategy()) {
        let mut store = CountryStore::new();
        apply(&mut store, FetchEvent::BulkSuccess(countries));

        for c in store.items() {
            prop_assert!(store.contains(&c.cca3));
            prop_assert_eq!(store.individual_status(&c.cca3), FetchStatus::Succeeded);
        }
    }

    // Individually fetched codes appear exactly once in items.
    #[test]
    fn prop_individual_fetch_never_duplicates(events in prop::collection::vec(event_strategy(), 1..40)) {
        let mut store = CountryStore::new();
        let mut fetched = HashSet::new();

        for event in events {
            match &event {
                FetchEvent::CodeSuccess(c) => {
                    fetched.insert(c.cca3.clone());
                }
                FetchEvent::BulkSuccess(_) => fetched.clear(),
                _ => {}
            }
            apply(&mut store, event);
        }

        for code in fetched {
            let count = store.items().iter().filter(|c| c.cca3 == code).count();
            prop_assert_eq!(count, 1, "code {} listed {} times", code, count);
        }
    }

    // Every record in items is the one stored under its code.
    #[test]
    fn prop_items_agree_with_lookup(events in prop::collection::vec(event_strategy(), 1..40)) {
        let mut store = CountryStore::new();
        for event in events {
            apply(&mut store, event);
        }

        for c in store.items() {
            prop_assert_eq!(store.get(&c.cca3), Some(c));
        }
    }

    // Applying the same bulk payload twice equals applying it once.
    #[test]
    fn prop_bulk_success_idempotent(countries in bulk_strategy()) {
        let mut once = CountryStore::new();
        apply(&mut once, FetchEvent::BulkSuccess(countries.clone()));

        let mut twice = CountryStore::new();
        apply(&mut twice, FetchEvent::BulkSuccess(countries.clone()));
        apply(&mut twice, FetchEvent::BulkSuccess(countries));

        prop_assert_eq!(once.items(), twice.items());
        prop_assert_eq!(once.len(), twice.len());
        for c in once.items() {
            prop_assert_eq!(once.get(&c.cca3), twice.get(&c.cca3));
        }
    }

    // A failed bulk fetch never removes cached records.
    #[test]
    fn prop_bulk_failure_preserves_cache(countries in bulk_strategy(), message in "[a-z ]{0,20}") {
        let mut store = CountryStore::new();
        apply(&mut store, FetchEvent::BulkSuccess(countries.clone()));
        apply(&mut store, FetchEvent::BulkFailure(message));

        prop_assert_eq!(store.status(), FetchStatus::Failed);
        prop_assert!(store.error().is_some());
        prop_assert_eq!(store.items(), countries.as_slice());
    }

    // Per-code completion order does not change which records are listed.
    #[test]
    fn prop_code_order_irrelevant(countries in bulk_strategy()) {
        let mut forward = CountryStore::new();
        for c in countries.iter().cloned() {
            apply(&mut forward, FetchEvent::CodeSuccess(c));
        }

        let mut backward = CountryStore::new();
        for c in countries.iter().rev().cloned() {
            apply(&mut backward, FetchEvent::CodeSuccess(c));
        }

        let forward_codes: HashSet<_> = forward.items().iter().map(|c| c.cca3.clone()).collect();
        let backward_codes: HashSet<_> = backward.items().iter().map(|c| c.cca3.clone()).collect();
        prop_assert_eq!(forward_codes, backward_codes);
    }
}
