//! Border Country Resolution
//!
//! A record's `borders` are lazy references. Resolution fetches the ones not
//! yet cached, all at once, and keeps a loading flag up until every one of
//! them has settled.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::models::Country;
use crate::store::{Catalog, CountryStore};

/// Splits `country.borders` into (cached, missing) codes, keeping order.
pub fn partition_borders(store: &CountryStore, country: &Country) -> (Vec<String>, Vec<String>) {
    country
        .borders
        .iter()
        .cloned()
        .partition(|code| store.contains(code))
}

/// What one resolution pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderResolution {
    /// Codes fetched in this pass; codes already in flight elsewhere are joined, not refetched
    pub requested: Vec<String>,
    /// Codes whose fetch failed
    pub failed: Vec<String>,
}

// == Border Resolver ==
/// Fetches missing border countries and exposes the section's loading flag.
#[derive(Clone)]
pub struct BorderResolver {
    catalog: Catalog,
    loading: Arc<watch::Sender<bool>>,
}

impl BorderResolver {
    pub fn new(catalog: Catalog) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            catalog,
            loading: Arc::new(loading),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Subscribes to the loading flag.
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    // == Resolve ==
    /// Fetches every border of `country` that is not cached yet.
    ///
    /// The loading flag is raised only when something is missing and drops
    /// once all fetches have settled, successful or not. A code another
    /// request is already fetching is awaited rather than fetched again.
    pub async fn resolve(&self, country: &Country) -> BorderResolution {
        let (_, missing) = {
            let store = self.catalog.read().await;
            partition_borders(&store, country)
        };

        if missing.is_empty() {
            self.loading.send_replace(false);
            return BorderResolution::default();
        }

        debug!(
            "Resolving {} missing borders of {}",
            missing.len(),
            country.cca3
        );
        self.loading.send_replace(true);

        let mut fetches = JoinSet::new();
        for code in missing.iter().cloned() {
            let catalog = self.catalog.clone();
            fetches.spawn(async move {
                let outcome = match catalog.ensure_country(&code).await {
                    Some(result) => BorderFetch::Dispatched(result.is_ok()),
                    None => BorderFetch::Joined(settled(&catalog, &code).await),
                };
                (code, outcome)
            });
        }

        let mut requested = Vec::new();
        let mut failed = Vec::new();
        while let Some(joined) = fetches.join_next().await {
            match joined {
                Ok((code, BorderFetch::Dispatched(ok))) => {
                    if !ok {
                        failed.push(code.clone());
                    }
                    requested.push(code);
                }
                Ok((_, BorderFetch::Joined(true))) => {}
                Ok((code, BorderFetch::Joined(false))) => failed.push(code),
                Err(e) => warn!("Border fetch task ended abnormally: {}", e),
            }
        }

        self.loading.send_replace(false);

        // Completion order is arbitrary; report in border order
        let border_order = |code: &String| missing.iter().position(|m| m == code);
        requested.sort_by_key(border_order);
        failed.sort_by_key(border_order);
        BorderResolution { requested, failed }
    }
}

/// How one missing border was resolved.
enum BorderFetch {
    /// This pass fetched the code; carries whether it succeeded
    Dispatched(bool),
    /// Another fetch was already in flight; carries how it settled
    Joined(bool),
}

/// Waits until no fetch for `code` is loading. True when the record ended up cached.
async fn settled(catalog: &Catalog, code: &str) -> bool {
    let mut changes = catalog.subscribe();
    loop {
        {
            let store = catalog.read().await;
            if !store.individual_status(code).is_loading() {
                return store.contains(code);
            }
        }
        if changes.changed().await.is_err() {
            return false;
        }
    }
}
