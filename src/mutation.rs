//! Create/update/delete coordination.
//!
//! Mutations never edit the product list themselves. A confirmed mutation
//! toggles the sync trigger and asks the [`SyncController`] to refetch, so
//! the visible list is always something the server returned.

use std::sync::Arc;

use log::{debug, info};

use crate::error::{InventoryError, Result};
use crate::gateway::InventoryGateway;
use crate::models::{DeleteAck, NewProduct, Product, ProductUpdate};
use crate::store::SharedStore;
use crate::sync::SyncController;

pub struct MutationController {
    gateway: Arc<dyn InventoryGateway>,
    store: SharedStore,
    sync: Arc<SyncController>,
}

impl MutationController {
    pub fn new(
        gateway: Arc<dyn InventoryGateway>,
        store: SharedStore,
        sync: Arc<SyncController>,
    ) -> Self {
        Self {
            gateway,
            store,
            sync,
        }
    }

    /// Creates a product. On success the Add modal closes and the list is
    /// refetched; on failure the modal stays open and the error is recorded.
    pub async fn create_product(&self, payload: NewProduct) -> Result<Product> {
        debug!("Creating product '{}'", payload.name);
        match self.gateway.create_product(&payload).await {
            Ok(created) => {
                info!("Product created: {} (ID: {})", created.name, created.id);
                {
                    let mut store = self.store.lock().await;
                    store.complete_create();
                    store.toggle_trigger();
                }
                self.sync.refresh().await;
                Ok(created)
            }
            Err(e) => Err(self.fail("create product", e).await),
        }
    }

    /// Applies a partial update. On success the Edit modal for `id` closes
    /// and the list is refetched.
    pub async fn update_product(&self, id: &str, update: ProductUpdate) -> Result<Product> {
        require_id(id)?;
        if update.is_empty() {
            return Err(InventoryError::Validation(
                "update must change at least one field".to_string(),
            ));
        }
        debug!("Updating product {id}: {update:?}");
        match self.gateway.update_product(id, &update).await {
            Ok(updated) => {
                info!("Product updated: {} (ID: {})", updated.name, updated.id);
                {
                    let mut store = self.store.lock().await;
                    store.complete_update(id);
                    store.toggle_trigger();
                }
                self.sync.refresh().await;
                Ok(updated)
            }
            Err(e) => Err(self.fail(&format!("update product {id}"), e).await),
        }
    }

    /// Deletes a product and refetches. On failure nothing changes except
    /// the recorded error.
    pub async fn delete_product(&self, id: &str) -> Result<DeleteAck> {
        require_id(id)?;
        debug!("Deleting product {id}");
        match self.gateway.delete_product(id).await {
            Ok(ack) => {
                info!("Product deleted: {id}");
                self.store.lock().await.toggle_trigger();
                self.sync.refresh().await;
                Ok(ack)
            }
            Err(e) => Err(self.fail(&format!("delete product {id}"), e).await),
        }
    }

    async fn fail(&self, action: &str, err: InventoryError) -> InventoryError {
        self.store
            .lock()
            .await
            .record_error(&format!("Failed to {action}: {err}"));
        err
    }
}

fn require_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(InventoryError::Validation(
            "product id must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod tests;
