//! IMS Inventory - client-side sync layer for the inventory screen
//!
//! Keeps a local product/store catalog consistent with the IMS backend,
//! switches between list-all and search queries as the search text changes,
//! and refetches after every confirmed create/update/delete.

pub mod config;
pub mod error;
pub mod gateway;
pub mod modal;
pub mod models;
pub mod mutation;
pub mod resolver;
pub mod screen;
pub mod store;
pub mod sync;
pub mod view;

pub use config::GatewayConfig;
pub use error::{InventoryError, Result};
pub use gateway::{HttpGateway, InventoryGateway};
pub use modal::ModalState;
pub use mutation::MutationController;
pub use models::{Availability, DeleteAck, NewProduct, Product, ProductUpdate, Store};
pub use resolver::{resolve_query_mode, QueryMode};
pub use screen::InventoryScreen;
pub use store::{InventorySnapshot, InventoryStore, SharedStore, SyncTrigger};
pub use sync::{FetchOutcome, SyncController};
pub use view::{InventorySummary, InventoryView, ProductRow};
