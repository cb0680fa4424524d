//! Unit tests for the gateway module.

mod mutations_tests;

use std::time::Duration;

use crate::config::GatewayConfig;
use crate::gateway::HttpGateway;

/// Builds a gateway pointed at a wiremock server.
pub(super) fn gateway_with_mock(mock_uri: &str) -> HttpGateway {
    let config = GatewayConfig::default()
        .with_base_url(mock_uri)
        .with_timeout(Duration::from_secs(5));
    HttpGateway::new(&config).unwrap()
}

pub(super) fn product_json(id: &str, name: &str, stock: u32) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "userID": "user-1",
        "name": name,
        "manufacturer": "Acme",
        "stock": stock,
        "description": format!("{name} description"),
        "__v": 0
    })
}
