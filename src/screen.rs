//! The inventory screen: one user's store plus the controllers acting on it.

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

use crate::config::GatewayConfig;
use crate::error::{InventoryError, Result};
use crate::gateway::{HttpGateway, InventoryGateway};
use crate::models::{DeleteAck, NewProduct, Product, ProductUpdate};
use crate::mutation::MutationController;
use crate::store::{InventorySnapshot, InventoryStore, SharedStore};
use crate::sync::{FetchOutcome, SyncController};
use crate::view::InventoryView;

pub struct InventoryScreen {
    store: SharedStore,
    sync: Arc<SyncController>,
    mutations: MutationController,
}

impl InventoryScreen {
    /// Wires a fresh store and controllers for `user_id` over `gateway`.
    pub fn new(gateway: Arc<dyn InventoryGateway>, user_id: &str) -> Result<Self> {
        if user_id.trim().is_empty() {
            return Err(InventoryError::Validation(
                "user id must not be empty".to_string(),
            ));
        }
        info!("Opening inventory screen for user {user_id}");
        let store = InventoryStore::shared();
        let sync = Arc::new(SyncController::new(
            Arc::clone(&gateway),
            Arc::clone(&store),
            user_id,
        ));
        let mutations = MutationController::new(gateway, Arc::clone(&store), Arc::clone(&sync));
        Ok(Self {
            store,
            sync,
            mutations,
        })
    }

    /// Same as [`new`](Self::new) over an [`HttpGateway`] built from `config`.
    pub fn connect(config: &GatewayConfig, user_id: &str) -> Result<Self> {
        let gateway = HttpGateway::new(config)?;
        Self::new(Arc::new(gateway), user_id)
    }

    pub fn user_id(&self) -> &str {
        self.sync.user_id()
    }

    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    pub async fn mount(&self) -> Option<FetchOutcome> {
        self.sync.mount().await
    }

    pub async fn set_search_query(&self, query: &str) -> FetchOutcome {
        self.sync.set_search_query(query).await
    }

    pub async fn open_add(&self) {
        self.store.lock().await.open_add_modal();
    }

    /// Opens the Edit modal on the listed product `id`; `false` if not listed.
    pub async fn open_edit(&self, id: &str) -> bool {
        self.store.lock().await.open_edit_modal(id)
    }

    pub async fn close_modal(&self) {
        self.store.lock().await.close_modal();
    }

    /// Creates a product owned by this screen's user; an empty
    /// `payload.user_id` is filled in.
    pub async fn create_product(&self, mut payload: NewProduct) -> Result<Product> {
        if payload.user_id.is_empty() {
            payload.user_id = self.user_id().to_string();
        }
        self.mutations.create_product(payload).await
    }

    pub async fn update_product(&self, id: &str, update: ProductUpdate) -> Result<Product> {
        self.mutations.update_product(id, update).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<DeleteAck> {
        self.mutations.delete_product(id).await
    }

    pub async fn snapshot(&self) -> InventorySnapshot {
        self.store.lock().await.snapshot()
    }

    pub async fn view(&self) -> InventoryView {
        InventoryView::from_snapshot(self.store.lock().await.state())
    }

    pub async fn subscribe(&self) -> watch::Receiver<InventorySnapshot> {
        self.store.lock().await.subscribe()
    }
}
