//! Error types for ims_inventory

use thiserror::Error;

/// Unified error type for gateway and controller operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Transport failure, timeout, or non-success HTTP status
    #[error("Network error: {0}")]
    Network(String),
    /// Payload was not valid JSON for the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Mutation target no longer exists on the server
    #[error("Not found: {0}")]
    NotFound(String),
    /// Malformed local input, rejected before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),
}

impl InventoryError {
    /// Builds a `Network` error from a non-success status and its body text.
    pub fn http_status(status: reqwest::StatusCode, body: &str) -> Self {
        if body.is_empty() {
            InventoryError::Network(format!("HTTP error: {status}"))
        } else {
            InventoryError::Network(format!("HTTP error: {status} - {body}"))
        }
    }

    /// Whether a UI may reasonably offer "try again" for this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, InventoryError::Network(_))
    }
}

impl From<reqwest::Error> for InventoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            InventoryError::Network(format!("request timed out: {err}"))
        } else {
            InventoryError::Network(err.to_string())
        }
    }
}

/// Result alias for ims_inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
