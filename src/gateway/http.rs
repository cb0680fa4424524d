//! reqwest-backed gateway implementation.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::GatewayConfig;
use crate::error::{InventoryError, Result};
use crate::models::{DeleteAck, NewProduct, Product, ProductUpdate, Store};

use super::InventoryGateway;

/// HTTP client for the IMS backend.
pub struct HttpGateway {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpGateway {
    /// Creates a gateway with the configured timeout and user agent applied
    /// to every request.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        info!("Creating IMS gateway for {}", config.base_url);
        debug!("Request timeout: {:?}", config.timeout);
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads the body and parses it, mapping non-success statuses to errors.
    ///
    /// `missing` names the target for a 404; `None` treats 404 like any other
    /// failing status.
    async fn parse_response<T: DeserializeOwned>(
        response: Response,
        what: &str,
        missing: Option<&str>,
    ) -> Result<T> {
        let status = response.status();
        debug!("{what} response status: {status}");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if status == StatusCode::NOT_FOUND {
                if let Some(target) = missing {
                    error!("{what} target not found: {target}");
                    return Err(InventoryError::NotFound(target.to_string()));
                }
            }
            error!("{what} failed with status {status}: {error_text}");
            return Err(InventoryError::http_status(status, &error_text));
        }

        let response_text = response.text().await?;
        debug!("{what} response length: {} bytes", response_text.len());
        Ok(serde_json::from_str(&response_text)?)
    }
}

fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::Validation(format!("{what} must not be empty")));
    }
    Ok(())
}

#[async_trait]
impl InventoryGateway for HttpGateway {
    async fn fetch_all_products(&self, user_id: &str) -> Result<Vec<Product>> {
        require_non_empty(user_id, "user id")?;
        let url = format!("{}/api/product/get/{}", self.base_url, user_id);
        debug!("Fetching all products at: {url}");

        let response = self.client.get(&url).send().await?;
        let products: Vec<Product> =
            Self::parse_response(response, "Fetch products", None).await?;
        info!("Fetched {} products for user {}", products.len(), user_id);
        Ok(products)
    }

    async fn search_products(&self, term: &str) -> Result<Vec<Product>> {
        if term.is_empty() {
            return Err(InventoryError::Validation(
                "search term must not be empty".to_string(),
            ));
        }
        let url = format!("{}/api/product/search", self.base_url);
        debug!("Searching products at: {url} (term: '{term}')");

        let response = self
            .client
            .get(&url)
            .query(&[("searchTerm", term)])
            .send()
            .await?;
        let products: Vec<Product> =
            Self::parse_response(response, "Search products", None).await?;
        info!("Search '{}' matched {} products", term, products.len());
        Ok(products)
    }

    async fn fetch_all_stores(&self, user_id: &str) -> Result<Vec<Store>> {
        require_non_empty(user_id, "user id")?;
        let url = format!("{}/api/store/get/{}", self.base_url, user_id);
        debug!("Fetching all stores at: {url}");

        let response = self.client.get(&url).send().await?;
        let stores: Vec<Store> = Self::parse_response(response, "Fetch stores", None).await?;
        info!("Fetched {} stores for user {}", stores.len(), user_id);
        Ok(stores)
    }

    async fn delete_product(&self, id: &str) -> Result<DeleteAck> {
        require_non_empty(id, "product id")?;
        // The backend exposes delete as a GET route.
        let url = format!("{}/api/product/delete/{}", self.base_url, id);
        debug!("Deleting product at: {url}");

        let response = self.client.get(&url).send().await?;
        let ack: DeleteAck = Self::parse_response(response, "Delete product", Some(id)).await?;
        info!("Deleted product {id}");
        Ok(ack)
    }

    async fn create_product(&self, payload: &NewProduct) -> Result<Product> {
        require_non_empty(&payload.user_id, "user id")?;
        let url = format!("{}/api/product/create", self.base_url);
        debug!("Creating product at: {url}");
        debug!(
            "Product payload: {}",
            serde_json::to_string(payload).unwrap_or_else(|_| "Failed to serialize".to_string())
        );

        let response = self.client.post(&url).json(payload).send().await?;
        let product: Product = Self::parse_response(response, "Create product", None).await?;
        info!("Created product: {} (ID: {})", product.name, product.id);
        Ok(product)
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product> {
        require_non_empty(id, "product id")?;
        let url = format!("{}/api/product/update/{}", self.base_url, id);
        debug!("Updating product at: {url}");

        let response = self.client.post(&url).json(update).send().await?;
        let product: Product =
            Self::parse_response(response, "Update product", Some(id)).await?;
        info!("Updated product: {} (ID: {})", product.name, product.id);
        Ok(product)
    }
}
