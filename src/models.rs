//! Wire types for the IMS product and store endpoints

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A product as returned by `/api/product/*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "deserialize_stock")]
    pub stock: u32,
    #[serde(default)]
    pub description: String,
    /// Owning user, absent in some search responses
    #[serde(rename = "userID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// The backend stores stock as a JSON number, so `5.0` shows up as often as
/// `5`. Whole non-negative values are accepted; fractions and negatives are not.
fn deserialize_stock<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).map_err(|_| D::Error::custom(format!("stock {n} out of range")));
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => Ok(f as u32),
        _ => Err(D::Error::custom(format!(
            "stock must be a non-negative whole number, got {value}"
        ))),
    }
}

impl Product {
    pub fn availability(&self) -> Availability {
        if self.stock > 0 {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }
}

/// Derived from stock; never sent over the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::OutOfStock => "Not in Stock",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A store as returned by `/api/store/get/{userId}`.
///
/// Display attributes are kept as raw JSON; this crate only counts stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Store {
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(|v| v.as_str())
    }
}

/// Body for `POST /api/product/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub manufacturer: String,
    pub stock: u32,
    pub description: String,
}

/// Partial body for `POST /api/product/update/{id}`; unset fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.manufacturer.is_none()
            && self.stock.is_none()
            && self.description.is_none()
    }
}

/// Delete acknowledgement; the backend reports per-collection counts
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteAck {
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
