//! Persist exchange action - write to every registered store

use futures::future::join_all;
use tracing::{debug, error};

use crate::common::ChatExchange;
use crate::domains::chat::StoreOutcome;
use crate::kernel::ServerDeps;

/// Write `exchange` to all stores concurrently.
///
/// Every store is attempted regardless of the others' results. Failures are
/// logged and reported as `stored: false`; nothing is propagated.
pub async fn persist_exchange(exchange: &ChatExchange, deps: &ServerDeps) -> Vec<StoreOutcome> {
    let writes = deps.stores.iter().map(|store| async move {
        let stored = match store.store(exchange).await {
            Ok(()) => {
                debug!(store = store.name(), "Chat exchange stored");
                true
            }
            Err(e) => {
                error!(store = store.name(), error = %format!("{e:#}"), "Failed to store chat exchange");
                false
            }
        };

        StoreOutcome {
            store: store.name().to_string(),
            stored,
        }
    });

    join_all(writes).await
}
