//! Command workflows - the API calls behind each shell command
//!
//! Each workflow runs to completion and folds every result, good or bad,
//! into a [`CommandOutcome`]. Errors never escape: they become dialogs.

use crate::api::InventoryApi;
use crate::error::ApiError;
use crate::messages::{CommandOutcome, InventoryCommand, Listing, Notice};
use crate::models::Item;

/// Fixed inputs for the workflows, taken from the config at startup
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    pub quantity_step: i64,
    pub sample_item: Item,
}

/// Run one command against the API
pub async fn execute(
    api: &dyn InventoryApi,
    command: &InventoryCommand,
    settings: &WorkflowSettings,
) -> CommandOutcome {
    let mut outcome = CommandOutcome::default();

    let (result, ok_title, err_title) = match command {
        InventoryCommand::Fetch => {
            refresh(api, &mut outcome).await;
            return outcome;
        }
        InventoryCommand::Add => (
            api.create_item(&settings.sample_item).await,
            "Add Item",
            "Add Error",
        ),
        InventoryCommand::Edit { item_id } => (
            bump_quantity(api, *item_id, settings.quantity_step).await,
            "Edit Item",
            "Edit Error",
        ),
        InventoryCommand::Delete { item_id } => {
            (api.delete_item(*item_id).await, "Delete Item", "Delete Error")
        }
    };

    match result {
        Ok(message) => {
            tracing::info!(?command, %message, "Command succeeded");
            outcome.notices.push(Notice::info(ok_title, message));
            refresh(api, &mut outcome).await;
        }
        Err(err) => {
            tracing::warn!(?command, error = %err, "Command failed");
            outcome.notices.push(failure_notice(command, err_title, &err));
        }
    }

    outcome
}

/// Read the item, add `step` to its quantity and write it back
async fn bump_quantity(api: &dyn InventoryApi, item_id: i64, step: i64) -> Result<String, ApiError> {
    let mut item = api.get_item(item_id).await?;
    item.quantity = item
        .quantity
        .checked_add(step)
        .ok_or(ApiError::OutOfRange("Quantity would overflow; item left unchanged"))?;
    api.update_item(item_id, &item).await
}

/// Reload the list. A failed reload leaves the list empty.
async fn refresh(api: &dyn InventoryApi, outcome: &mut CommandOutcome) {
    match api.list_items().await {
        Ok(items) => {
            tracing::info!(count = items.len(), "Fetched items");
            outcome.listing = Listing::Replaced(items);
        }
        Err(err) => {
            tracing::warn!(error = %err, "Fetch failed");
            outcome
                .notices
                .push(failure_notice(&InventoryCommand::Fetch, "Fetch Error", &err));
            outcome.listing = Listing::Cleared;
        }
    }
}

/// Pick dialog text by error kind
pub fn failure_notice(command: &InventoryCommand, title: &str, err: &ApiError) -> Notice {
    let target = match command {
        InventoryCommand::Edit { item_id } | InventoryCommand::Delete { item_id } => Some(*item_id),
        _ => None,
    };

    if let ApiError::NotFound(message) = err {
        return Notice::warning(title, message.clone());
    }

    match (err.status(), target) {
        (Some(404), Some(id)) => Notice::error(
            title,
            format!("Item {} not found on server.\n\n{}", id, err),
        ),
        (Some(401), _) => Notice::error(
            title,
            format!("Unauthorized: check the bearer token.\n\n{}", err),
        ),
        _ => Notice::error(title, err.to_string()),
    }
}
