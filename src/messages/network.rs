//! Network messages - communication between App and Network layers

use crate::models::Item;

/// A unit of work for the network layer: one user command, including its
/// follow-up refresh
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryCommand {
    Fetch,
    Add,
    Edit { item_id: i64 },
    Delete { item_id: i64 },
}

impl InventoryCommand {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryCommand::Fetch => "Fetching items",
            InventoryCommand::Add => "Adding item",
            InventoryCommand::Edit { .. } => "Updating item",
            InventoryCommand::Delete { .. } => "Deleting item",
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    Execute { id: u64, command: InventoryCommand },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Completed { id: u64, outcome: CommandOutcome },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One modal dialog to show the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// What a finished command did to the item list
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Listing {
    /// The command failed before refreshing
    #[default]
    Unchanged,
    /// A fetch was started and failed; the list stays empty
    Cleared,
    Replaced(Vec<Item>),
}

/// Result of running one [`InventoryCommand`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandOutcome {
    /// Dialogs in the order they were raised
    pub notices: Vec<Notice>,
    pub listing: Listing,
}
