//! API layer - typed access to the inventory server's items endpoint
//!
//! `InventoryApi` is the seam the command workflows are written against;
//! `InventoryClient` is the HTTP implementation.

pub mod client;
pub mod response;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::Item;

pub use client::{ClientConfig, InventoryClient};

/// CRUD operations on inventory items
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /items.php`
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;

    /// `GET /items.php?id={id}`
    async fn get_item(&self, id: i64) -> Result<Item, ApiError>;

    /// `POST /items.php`, returns the server's message
    async fn create_item(&self, item: &Item) -> Result<String, ApiError>;

    /// `PUT /items.php?id={id}`, returns the server's message
    async fn update_item(&self, id: i64, item: &Item) -> Result<String, ApiError>;

    /// `DELETE /items.php?id={id}`, returns the server's message
    async fn delete_item(&self, id: i64) -> Result<String, ApiError>;
}
