//! Background eviction of expired results.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::store::ResultStore;

/// Handle to a running sweep task.
pub struct SweepHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl SweepHandle {
    /// Stop the sweep task and wait for it to exit.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

/// Spawn a periodic sweep over `store` at its configured interval.
///
/// Eviction and retrieval serialize on the store's internal lock, so for
/// any given token exactly one side performs the removal; the other
/// observes it as already gone. Records older than the TTL are evicted
/// whether or not `get` was ever called for them.
pub fn spawn_sweeper(store: Arc<ResultStore>) -> SweepHandle {
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();
    let interval = store.config().sweep_interval;

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = task_cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let evicted = store.sweep_expired();
                    if evicted > 0 {
                        debug!(evicted, remaining = store.len(), "swept expired results");
                    }
                }
            }
        }
    });

    SweepHandle { cancel, task }
}
