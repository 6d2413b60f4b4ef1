//! # Stockroom
//!
//! A terminal client for the Orbital inventory REST API.
//!
//! ## Features
//! - Fetch, add, edit and delete inventory items
//! - Bearer token auth
//! - Server responses relayed through modal dialogs
//! - Low-stock flagging from each item's reorder threshold
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (owned state + command handlers)
//! - Network Layer (Tokio runtime, one command at a time)

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use api::{ClientConfig, InventoryApi, InventoryClient};
pub use app::{AppActor, AppState};
pub use config::Config;
pub use error::{ApiError, CommandError};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{parse_item_id, Item};
pub use network::{NetworkActor, WorkflowSettings};
