//! TTL Cleanup Task
//!
//! Background task that periodically removes expired product cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::InMemoryProductCache;

/// Spawns a background task that periodically drops expired cache entries.
///
/// The task sleeps for `cleanup_interval_secs` between runs and takes the
/// cache's write lock only for the sweep itself.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = InMemoryProductCache::new(1000, 300);
/// let cleanup_handle = spawn_cleanup_task(&cache, 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    cache: &InMemoryProductCache,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let store = cache.store();
    // A zero interval would spin; run at least once per second
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired products", removed);
            } else {
                debug!("TTL cleanup: no expired products found");
            }
        }
    })
}
