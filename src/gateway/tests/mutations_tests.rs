//! Tests for create, update and delete requests.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{gateway_with_mock, product_json};
use crate::error::InventoryError;
use crate::gateway::InventoryGateway;
use crate::models::{NewProduct, ProductUpdate};

fn new_widget() -> NewProduct {
    NewProduct {
        user_id: "user-1".to_string(),
        name: "Widget".to_string(),
        manufacturer: "Acme".to_string(),
        stock: 5,
        description: "Widget description".to_string(),
    }
}

// ── delete_product ───────────────────────────────────────────────────

#[tokio::test]
async fn delete_product_success() {
    let mock_server = MockServer::start().await;
    let gateway = gateway_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/product/delete/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "deleteProduct": { "acknowledged": true, "deletedCount": 1 },
            "deletePurchaseProduct": { "acknowledged": true, "deletedCount": 0 },
            "deleteSaleProduct": { "acknowledged": true, "deletedCount": 0 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ack = gateway.delete_product("1").await.unwrap();
    assert!(ack.details.contains_key("deleteProduct"));
}

#[tokio::test]
async fn delete_product_404_is_not_found() {
    let mock_server = MockServer::start().await;
    let gateway = gateway_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/product/delete/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let result = gateway.delete_product("gone").await;
    match result.unwrap_err() {
        InventoryError::NotFound(id) => assert_eq!(id, "gone"),
        other => panic!("Expected InventoryError::NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn delete_product_500_is_network_error() {
    let mock_server = MockServer::start().await;
    let gateway = gateway_with_mock(&mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/product/delete/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = gateway.delete_product("1").await;
    assert!(matches!(result, Err(InventoryError::Network(_))));
}

#[tokio::test]
async fn delete_product_rejects_empty_id() {
    let gateway = gateway_with_mock("http://127.0.0.1:9");
    let result = gateway.delete_product("").await;
    assert!(matches!(result, Err(InventoryError::Validation(_))));
}

// ── create_product ───────────────────────────────────────────────────

#[tokio::test]
async fn create_product_posts_payload() {
    let mock_server = MockServer::start().await;
    let gateway = gateway_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/product/create"))
        .and(body_json(serde_json::json!({
            "userId": "user-1",
            "name": "Widget",
            "manufacturer": "Acme",
            "stock": 5,
            "description": "Widget description"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("new-1", "Widget", 5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = gateway.create_product(&new_widget()).await.unwrap();
    assert_eq!(created.id, "new-1");
    assert_eq!(created.stock, 5);
}

#[tokio::test]
async fn create_product_400_error() {
    let mock_server = MockServer::start().await;
    let gateway = gateway_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/product/create"))
        .respond_with(ResponseTemplate::new(400).set_body_string("name is required"))
        .mount(&mock_server)
        .await;

    let result = gateway.create_product(&new_widget()).await;
    match result.unwrap_err() {
        InventoryError::Network(msg) => assert!(msg.contains("name is required")),
        other => panic!("Expected InventoryError::Network, got: {other:?}"),
    }
}

// ── update_product ───────────────────────────────────────────────────

#[tokio::test]
async fn update_product_posts_partial_body() {
    let mock_server = MockServer::start().await;
    let gateway = gateway_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/product/update/1"))
        .and(body_json(serde_json::json!({ "stock": 0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json("1", "Widget", 0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let update = ProductUpdate {
        stock: Some(0),
        ..Default::default()
    };
    let updated = gateway.update_product("1", &update).await.unwrap();
    assert_eq!(updated.stock, 0);
}

#[tokio::test]
async fn update_product_404_is_not_found() {
    let mock_server = MockServer::start().await;
    let gateway = gateway_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/product/update/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let update = ProductUpdate {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let result = gateway.update_product("gone", &update).await;
    assert!(matches!(result, Err(InventoryError::NotFound(_))));
}
