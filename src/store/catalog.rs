//! Catalog Context
//!
//! Owns the shared country store and the upstream API. Constructed once by
//! the application entry point and cloned into every consumer.

use std::sync::Arc;

use tokio::sync::{watch, RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::CountryApi;
use crate::error::NetworkError;
use crate::models::Country;
use crate::store::{CountryStore, FetchStatus};

// == Catalog ==
/// Shared handle to the country store and the fetch actions that drive it.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<RwLock<CountryStore>>,
    api: Arc<dyn CountryApi>,
    changes: Arc<watch::Sender<u64>>,
}

impl Catalog {
    // == Constructor ==
    pub fn new(api: Arc<dyn CountryApi>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            store: Arc::new(RwLock::new(CountryStore::new())),
            api,
            changes: Arc::new(changes),
        }
    }

    // == Subscribe ==
    /// Returns a receiver that observes the store version after every transition.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    // == Read ==
    /// Read access to the current store state.
    pub async fn read(&self) -> RwLockReadGuard<'_, CountryStore> {
        self.store.read().await
    }

    // == Fetch All ==
    /// Runs one bulk fetch lifecycle.
    ///
    /// Does not check for an in-flight bulk fetch; see [`Catalog::ensure_loaded`].
    pub async fn fetch_all(&self) -> Result<usize, NetworkError> {
        self.apply(CountryStore::begin_bulk).await;
        self.run_bulk().await
    }

    /// Dispatches a bulk fetch only when the bulk machine is idle.
    ///
    /// Returns `None` when nothing was dispatched.
    pub async fn ensure_loaded(&self) -> Option<Result<usize, NetworkError>> {
        let dispatched = self
            .apply(|store| {
                if store.status() == FetchStatus::Idle {
                    store.begin_bulk();
                    true
                } else {
                    false
                }
            })
            .await;

        if dispatched {
            Some(self.run_bulk().await)
        } else {
            None
        }
    }

    // == Fetch By Code ==
    /// Runs one per-code fetch lifecycle.
    pub async fn fetch_by_code(&self, code: &str) -> Result<Country, NetworkError> {
        self.apply(|store| store.begin_code(code)).await;
        self.run_code(code).await
    }

    /// Dispatches a per-code fetch unless the record is cached or its fetch
    /// is already loading or settled successfully.
    pub async fn ensure_country(&self, code: &str) -> Option<Result<Country, NetworkError>> {
        let dispatched = self
            .apply(|store| {
                let status = store.individual_status(code);
                if store.contains(code)
                    || status == FetchStatus::Loading
                    || status == FetchStatus::Succeeded
                {
                    false
                } else {
                    store.begin_code(code);
                    true
                }
            })
            .await;

        if dispatched {
            Some(self.run_code(code).await)
        } else {
            None
        }
    }

    /// Spawns a per-code fetch that runs to completion on its own.
    pub fn spawn_fetch_by_code(&self, code: String) -> JoinHandle<Result<Country, NetworkError>> {
        let catalog = self.clone();
        tokio::spawn(async move { catalog.fetch_by_code(&code).await })
    }

    async fn run_bulk(&self) -> Result<usize, NetworkError> {
        match self.api.fetch_all().await {
            Ok(countries) => {
                let count = countries.len();
                self.apply(|store| store.complete_bulk(countries)).await;
                info!("Bulk fetch succeeded with {} countries", count);
                Ok(count)
            }
            Err(err) => {
                warn!("Bulk fetch failed: {}", err);
                self.apply(|store| store.fail_bulk(&err.to_string())).await;
                Err(err)
            }
        }
    }

    async fn run_code(&self, code: &str) -> Result<Country, NetworkError> {
        match self.api.fetch_by_code(code).await {
            Ok(country) => {
                debug!("Fetched country {}", code);
                self.apply(|store| store.complete_code(code, country.clone()))
                    .await;
                Ok(country)
            }
            Err(err) => {
                warn!("Fetch for country {} failed: {}", code, err);
                self.apply(|store| store.fail_code(code)).await;
                Err(err)
            }
        }
    }

    /// Applies one transition and publishes the new version, both under the
    /// write lock so subscribers see versions in store order.
    async fn apply<R>(&self, transition: impl FnOnce(&mut CountryStore) -> R) -> R {
        let mut store = self.store.write().await;
        let result = transition(&mut *store);
        self.changes.send_replace(store.version());
        result
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StaticApi;
    use super::*;
    use crate::models::fixtures::country;

    fn sample() -> Vec<Country> {
        vec![
            country("FRA", "France", "Europe", 67_000_000),
            country("DEU", "Germany", "Europe", 83_000_000),
        ]
    }

    #[tokio::test]
    async fn test_fetch_all_success() {
        let catalog = Catalog::new(Arc::new(StaticApi::with_all(sample())));

        let count = catalog.fetch_all().await.unwrap();

        assert_eq!(count, 2);
        let store = catalog.read().await;
        assert_eq!(store.status(), FetchStatus::Succeeded);
        assert!(store.contains("FRA"));
    }

    #[tokio::test]
    async fn test_fetch_all_failure_becomes_transition() {
        let catalog = Catalog::new(Arc::new(StaticApi::default()));

        let result = catalog.fetch_all().await;

        assert_eq!(result.unwrap_err(), NetworkError::Status(500));
        let store = catalog.read().await;
        assert_eq!(store.status(), FetchStatus::Failed);
        assert_eq!(store.error(), Some("Request failed with status code 500"));
    }

    #[tokio::test]
    async fn test_ensure_loaded_only_dispatches_when_idle() {
        let api = Arc::new(StaticApi::with_all(sample()));
        let catalog = Catalog::new(api.clone());

        assert!(catalog.ensure_loaded().await.is_some());
        assert!(catalog.ensure_loaded().await.is_none());
        assert_eq!(api.calls(), vec!["all"]);
    }

    #[tokio::test]
    async fn test_fetch_by_code_failure_is_local() {
        let catalog = Catalog::new(Arc::new(StaticApi::with_codes(sample())));

        assert!(catalog.fetch_by_code("XYZ").await.is_err());
        assert!(catalog.fetch_by_code("DEU").await.is_ok());

        let store = catalog.read().await;
        assert_eq!(store.individual_status("XYZ"), FetchStatus::Failed);
        assert_eq!(store.individual_status("DEU"), FetchStatus::Succeeded);
        assert_eq!(store.status(), FetchStatus::Idle);
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_country_skips_cached() {
        let api = Arc::new(StaticApi::with_codes(sample()));
        let catalog = Catalog::new(api.clone());

        assert!(catalog.ensure_country("FRA").await.is_some());
        assert!(catalog.ensure_country("FRA").await.is_none());
        assert_eq!(api.calls(), vec!["FRA"]);
    }

    #[tokio::test]
    async fn test_ensure_country_retries_after_failure() {
        let api = Arc::new(StaticApi::default());
        let catalog = Catalog::new(api.clone());

        assert!(matches!(catalog.ensure_country("XYZ").await, Some(Err(_))));
        assert!(matches!(catalog.ensure_country("XYZ").await, Some(Err(_))));
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let catalog = Catalog::new(Arc::new(StaticApi::with_all(sample())));
        let mut changes = catalog.subscribe();

        catalog.fetch_all().await.unwrap();

        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow_and_update(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_published_version_matches_store_after_concurrent_fetches() {
        let codes: Vec<String> = (b'A'..=b'Z')
            .flat_map(|a| (b'A'..=b'Z').map(move |b| format!("{}{}X", a as char, b as char)))
            .collect();
        // Every other code is unknown upstream, so failures interleave with successes
        let known: Vec<Country> = codes
            .iter()
            .step_by(2)
            .map(|code| country(code, code, "Asia", 1))
            .collect();
        let catalog = Catalog::new(Arc::new(StaticApi::with_codes(known)));
        let changes = catalog.subscribe();

        for _ in 0..10 {
            let handles: Vec<_> = codes
                .iter()
                .map(|code| catalog.spawn_fetch_by_code(code.clone()))
                .collect();
            for handle in handles {
                let _ = handle.await.unwrap();
            }

            let version = catalog.read().await.version();
            assert_eq!(*changes.borrow(), version);
        }
    }

    #[tokio::test]
    async fn test_spawned_fetch_runs_to_completion() {
        let catalog = Catalog::new(Arc::new(StaticApi::with_codes(sample())));

        let handle = catalog.spawn_fetch_by_code("DEU".to_string());
        handle.await.unwrap().unwrap();

        assert!(catalog.read().await.contains("DEU"));
    }
}
