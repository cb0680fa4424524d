//! Remote data gateway for the IMS product/store REST endpoints.
//!
//! Every operation is a single request with no retries; failures are
//! returned to the calling controller, which decides what to do with them.

mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DeleteAck, NewProduct, Product, ProductUpdate, Store};

pub use http::HttpGateway;

/// Asynchronous access to the inventory backend.
///
/// Implemented by [`HttpGateway`] for the real service; controllers hold it
/// as `Arc<dyn InventoryGateway>` so tests can substitute their own.
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// `GET /api/product/get/{userId}`
    async fn fetch_all_products(&self, user_id: &str) -> Result<Vec<Product>>;

    /// `GET /api/product/search?searchTerm={term}`; `term` must be non-empty
    async fn search_products(&self, term: &str) -> Result<Vec<Product>>;

    /// `GET /api/store/get/{userId}`
    async fn fetch_all_stores(&self, user_id: &str) -> Result<Vec<Store>>;

    /// `GET /api/product/delete/{id}`
    async fn delete_product(&self, id: &str) -> Result<DeleteAck>;

    /// `POST /api/product/create`
    async fn create_product(&self, payload: &NewProduct) -> Result<Product>;

    /// `POST /api/product/update/{id}`
    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product>;
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
