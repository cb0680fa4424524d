//! In-memory inventory state with snapshot observers.
//!
//! The store is the only owner of the product list, store list, search
//! query, refresh trigger and modal state. Every write publishes a fresh
//! [`InventorySnapshot`] on a `tokio::sync::watch` channel; views subscribe
//! and re-derive from the latest snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use tokio::sync::{watch, Mutex};

use crate::modal::ModalState;
use crate::models::{Product, Store};

/// Store handle shared by the controllers. Never held across an await.
pub type SharedStore = Arc<Mutex<InventoryStore>>;

/// A toggled "something changed, re-fetch" signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncTrigger(bool);

impl SyncTrigger {
    /// Flips the value and returns the new one; always differs from before.
    pub fn toggle(&mut self) -> bool {
        self.0 = !self.0;
        self.0
    }

    pub fn value(&self) -> bool {
        self.0
    }
}

/// Owned copy of everything the inventory screen shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    pub products: Vec<Product>,
    pub stores: Vec<Store>,
    pub search_query: String,
    pub trigger: SyncTrigger,
    pub modal: ModalState,
    /// Most recent failure worth showing inline; cleared by the next
    /// successful product fetch
    pub last_error: Option<String>,
    /// Failure of the most recent store-list fetch; cleared only by a
    /// successful store fetch
    pub store_error: Option<String>,
    pub last_synced_at: Option<DateTime<Utc>>,
}

pub struct InventoryStore {
    state: InventorySnapshot,
    /// Highest product-fetch sequence number written so far
    applied_product_seq: u64,
    tx: watch::Sender<InventorySnapshot>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(InventorySnapshot::default());
        Self {
            state: InventorySnapshot::default(),
            applied_product_seq: 0,
            tx,
        }
    }

    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Receives a snapshot after every write. The current value is available
    /// immediately via `borrow()`.
    pub fn subscribe(&self) -> watch::Receiver<InventorySnapshot> {
        self.tx.subscribe()
    }

    pub fn state(&self) -> &InventorySnapshot {
        &self.state
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        self.state.clone()
    }

    pub fn applied_product_seq(&self) -> u64 {
        self.applied_product_seq
    }

    fn notify(&self) {
        self.tx.send_replace(self.state.clone());
    }

    pub fn set_search_query(&mut self, query: &str) {
        if self.state.search_query == query {
            return;
        }
        debug!("Search query changed to '{query}'");
        self.state.search_query = query.to_string();
        self.notify();
    }

    pub fn toggle_trigger(&mut self) -> bool {
        let value = self.state.trigger.toggle();
        debug!("Sync trigger toggled to {value}");
        self.notify();
        value
    }

    /// Applies a product list fetched under `seq`. Returns `false` (and
    /// leaves the list alone) when a newer fetch already landed.
    pub fn apply_products(&mut self, seq: u64, products: Vec<Product>) -> bool {
        if seq <= self.applied_product_seq {
            debug!(
                "Dropping stale product response #{seq} (already applied #{})",
                self.applied_product_seq
            );
            return false;
        }
        info!("Applying {} products from fetch #{seq}", products.len());
        self.applied_product_seq = seq;
        self.state.products = products;
        self.state.last_error = None;
        self.state.last_synced_at = Some(Utc::now());
        self.notify();
        true
    }

    /// Records a failed product fetch under `seq`. The list is untouched;
    /// older responses still in flight are rejected from now on.
    pub fn record_product_failure(&mut self, seq: u64, message: &str) -> bool {
        if seq <= self.applied_product_seq {
            debug!("Ignoring stale failure of product fetch #{seq}: {message}");
            return false;
        }
        warn!("Product fetch #{seq} failed, keeping previous list: {message}");
        self.applied_product_seq = seq;
        self.state.last_error = Some(message.to_string());
        self.notify();
        true
    }

    pub fn apply_stores(&mut self, stores: Vec<Store>) {
        info!("Applying {} stores", stores.len());
        self.state.stores = stores;
        self.state.store_error = None;
        self.notify();
    }

    /// Records a failed store fetch. The store list is untouched and product
    /// fetches never clear this error.
    pub fn record_store_failure(&mut self, message: &str) {
        warn!("Store fetch failed, keeping previous list: {message}");
        self.state.store_error = Some(message.to_string());
        self.notify();
    }

    pub fn record_error(&mut self, message: &str) {
        warn!("{message}");
        self.state.last_error = Some(message.to_string());
        self.notify();
    }

    pub fn clear_error(&mut self) {
        if self.state.last_error.take().is_some() {
            self.notify();
        }
    }

    pub fn open_add_modal(&mut self) {
        self.state.modal.open_add();
        self.notify();
    }

    /// Opens the Edit modal on a snapshot of the listed product `id`.
    /// Returns `false` when no such product is currently listed.
    pub fn open_edit_modal(&mut self, id: &str) -> bool {
        let Some(product) = self.state.products.iter().find(|p| p.id == id) else {
            debug!("Edit requested for unlisted product {id}");
            return false;
        };
        let product = product.clone();
        self.state.modal.open_edit(&product);
        self.notify();
        true
    }

    pub fn close_modal(&mut self) {
        self.state.modal.close();
        self.notify();
    }

    pub fn complete_create(&mut self) {
        self.state.modal.complete_create();
        self.notify();
    }

    pub fn complete_update(&mut self, id: &str) {
        self.state.modal.complete_update(id);
        self.notify();
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
