//! Synchronization controller: decides when to fetch and which responses
//! may land in the store.
//!
//! Three things cause a product fetch: the initial mount, a search query
//! change, and a refresh after a trigger toggle. Requests are never
//! cancelled, so each product fetch is numbered at dispatch time and the
//! store rejects any response older than the newest one it has written.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::gateway::InventoryGateway;
use crate::models::Product;
use crate::resolver::{resolve_query_mode, QueryMode};
use crate::store::{InventoryStore, SharedStore};

/// What happened to one product fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Written to the store with this many products
    Applied(usize),
    /// Arrived after a newer fetch had landed; discarded
    Stale,
    /// Gateway failed; previous list kept, message recorded in the store
    Failed(String),
    /// Nothing to do (query unchanged)
    Skipped,
    /// A refresh was already running; it will fetch once more when done
    Coalesced,
}

#[derive(Debug, Default)]
struct RefreshState {
    in_flight: bool,
    pending: bool,
}

pub struct SyncController {
    gateway: Arc<dyn InventoryGateway>,
    store: SharedStore,
    user_id: String,
    next_seq: AtomicU64,
    mounted: AtomicBool,
    refresh: Mutex<RefreshState>,
}

impl SyncController {
    pub fn new(gateway: Arc<dyn InventoryGateway>, store: SharedStore, user_id: &str) -> Self {
        Self {
            gateway,
            store,
            user_id: user_id.to_string(),
            next_seq: AtomicU64::new(0),
            mounted: AtomicBool::new(false),
            refresh: Mutex::new(RefreshState::default()),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Initial load: products and stores, fetched concurrently. Runs once;
    /// later calls return `None` without touching the network.
    pub async fn mount(&self) -> Option<FetchOutcome> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Already mounted, skipping initial fetch");
            return None;
        }
        info!("Mounting inventory for user {}", self.user_id);
        let (products, ()) = tokio::join!(self.fetch_products(), self.fetch_stores());
        Some(products)
    }

    /// Writes the new query and fetches products for it. Stores are not
    /// refetched.
    pub async fn set_search_query(&self, query: &str) -> FetchOutcome {
        let (seq, mode) = {
            let mut store = self.store.lock().await;
            if store.state().search_query == query {
                return FetchOutcome::Skipped;
            }
            store.set_search_query(query);
            self.dispatch(&store)
        };
        self.complete(seq, mode).await
    }

    /// Reacts to a trigger toggle by refetching products for the current
    /// query.
    ///
    /// Toggles that arrive while a refresh is running collapse into a single
    /// extra fetch after it finishes.
    pub async fn refresh(&self) -> FetchOutcome {
        {
            let mut state = self.refresh.lock().await;
            if state.in_flight {
                debug!("Refresh already in flight, queueing one rerun");
                state.pending = true;
                return FetchOutcome::Coalesced;
            }
            state.in_flight = true;
        }

        loop {
            let outcome = self.fetch_products().await;

            let mut state = self.refresh.lock().await;
            if state.pending {
                state.pending = false;
                debug!("Running queued refresh");
                continue;
            }
            state.in_flight = false;
            return outcome;
        }
    }

    /// Fetches products for whatever query the store currently holds.
    pub async fn fetch_products(&self) -> FetchOutcome {
        let (seq, mode) = {
            let store = self.store.lock().await;
            self.dispatch(&store)
        };
        self.complete(seq, mode).await
    }

    /// Fetches the store list. Failures are recorded and the previous list kept.
    pub async fn fetch_stores(&self) {
        let result = self.gateway.fetch_all_stores(&self.user_id).await;
        let mut store = self.store.lock().await;
        match result {
            Ok(stores) => store.apply_stores(stores),
            Err(e) => store.record_store_failure(&format!("Failed to fetch stores: {e}")),
        }
    }

    /// Numbers the fetch and picks its endpoint. Called with the store
    /// locked so sequence order matches query order.
    fn dispatch(&self, store: &InventoryStore) -> (u64, QueryMode) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mode = resolve_query_mode(&store.state().search_query, &self.user_id);
        debug!("Dispatching product fetch #{seq}: {mode:?}");
        (seq, mode)
    }

    async fn complete(&self, seq: u64, mode: QueryMode) -> FetchOutcome {
        let result = self.run_query(&mode).await;

        let mut store = self.store.lock().await;
        match result {
            Ok(products) => {
                let count = products.len();
                if store.apply_products(seq, products) {
                    FetchOutcome::Applied(count)
                } else {
                    FetchOutcome::Stale
                }
            }
            Err(e) => {
                let message = e.to_string();
                if store.record_product_failure(seq, &message) {
                    FetchOutcome::Failed(message)
                } else {
                    FetchOutcome::Stale
                }
            }
        }
    }

    async fn run_query(&self, mode: &QueryMode) -> Result<Vec<Product>> {
        match mode {
            QueryMode::ListAll { user_id } => self.gateway.fetch_all_products(user_id).await,
            QueryMode::Search { term } => self.gateway.search_products(term).await,
        }
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
