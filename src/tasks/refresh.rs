//! Bulk Refresh Task
//!
//! Background task that prefetches the country collection and, when an
//! interval is configured, re-fetches it periodically.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::store::Catalog;

/// Spawns the prefetch/refresh task.
///
/// The first bulk fetch is issued immediately if the store is still idle.
/// With a non-zero `refresh_interval_secs` the task then loops, sleeping for
/// the interval and re-issuing a bulk fetch unless one is already loading.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_refresh_task(catalog: Catalog, refresh_interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Some(Err(e)) = catalog.ensure_loaded().await {
            warn!("Initial country prefetch failed: {}", e);
        }

        if refresh_interval_secs == 0 {
            debug!("Periodic refresh disabled");
            return;
        }

        info!(
            "Starting refresh task with interval of {} seconds",
            refresh_interval_secs
        );
        let interval = Duration::from_secs(refresh_interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            if catalog.read().await.status().is_loading() {
                debug!("Refresh skipped: bulk fetch already in flight");
                continue;
            }

            match catalog.fetch_all().await {
                Ok(count) => info!("Refresh: loaded {} countries", count),
                Err(e) => warn!("Refresh failed: {}", e),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::country;
    use crate::store::{testing::StaticApi, FetchStatus};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_prefetch_without_interval() {
        let api = Arc::new(StaticApi::with_all(vec![country("FRA", "France", "Europe", 1)]));
        let catalog = Catalog::new(api.clone());

        let handle = spawn_refresh_task(catalog.clone(), 0);
        handle.await.unwrap();

        assert_eq!(catalog.read().await.status(), FetchStatus::Succeeded);
        assert_eq!(api.calls(), vec!["all"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_refresh() {
        let api = Arc::new(StaticApi::with_all(vec![country("FRA", "France", "Europe", 1)]));
        let catalog = Catalog::new(api.clone());

        let handle = spawn_refresh_task(catalog, 10);

        // Paused clock auto-advances while every task is idle
        tokio::time::sleep(Duration::from_secs(25)).await;
        handle.abort();

        assert_eq!(api.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_task_can_be_aborted() {
        let catalog = Catalog::new(Arc::new(StaticApi::default()));

        let handle = spawn_refresh_task(catalog, 1);

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
