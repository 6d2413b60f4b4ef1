//! Command handlers - business logic for processing UI events

use chrono::Local;

use crate::app::AppState;
use crate::error::CommandError;
use crate::messages::ui_events::CommandKind;
use crate::messages::{InventoryCommand, Listing, NetworkCommand, NetworkResponse, Notice};

impl AppState {
    // ========================
    // Selection
    // ========================

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.items.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    /// Id of the selected row, checked before any request is made
    pub fn selected_item_id(&self) -> Result<i64, CommandError> {
        let item = self.selected_item().ok_or(CommandError::NoSelection)?;
        if item.is_persisted() {
            Ok(item.item_id)
        } else {
            Err(CommandError::InvalidItemId)
        }
    }

    // ========================
    // Commands
    // ========================

    /// Turn a user command into a network command.
    ///
    /// Returns `None` when nothing should be sent: another command is still
    /// running, or a precondition failed (in which case a dialog is queued).
    pub fn request_command(&mut self, kind: CommandKind) -> Option<NetworkCommand> {
        if self.is_loading {
            tracing::debug!(command = kind.as_str(), "Busy, ignoring command");
            return None;
        }

        let command = match self.resolve(kind) {
            Ok(command) => command,
            Err(err) => {
                tracing::info!(command = kind.as_str(), error = %err, "Precondition failed");
                self.dialogs.push_back(precondition_notice(kind, err));
                return None;
            }
        };

        // Fetch empties the list up front; a failure leaves it empty
        if command == InventoryCommand::Fetch {
            self.items.clear();
            self.selected = None;
        }

        let id = self.next_id();
        self.is_loading = true;
        self.pending = Some((id, command.clone()));
        Some(NetworkCommand::Execute { id, command })
    }

    fn resolve(&self, kind: CommandKind) -> Result<InventoryCommand, CommandError> {
        Ok(match kind {
            CommandKind::Fetch => InventoryCommand::Fetch,
            CommandKind::Add => InventoryCommand::Add,
            CommandKind::Edit => InventoryCommand::Edit {
                item_id: self.selected_item_id()?,
            },
            CommandKind::Delete => InventoryCommand::Delete {
                item_id: self.selected_item_id()?,
            },
        })
    }

    /// Apply a finished command
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let NetworkResponse::Completed { id, outcome } = response;

        match &self.pending {
            Some((pending_id, _)) if *pending_id == id => {}
            _ => {
                tracing::debug!(id, "Ignoring stale response");
                return;
            }
        }

        self.pending = None;
        self.is_loading = false;
        self.dialogs.extend(outcome.notices);

        match outcome.listing {
            Listing::Unchanged => {}
            Listing::Cleared => {
                self.items.clear();
                self.selected = None;
            }
            Listing::Replaced(items) => {
                let previous = self.selected_item().map(|i| i.item_id);
                self.items = items;
                self.selected =
                    previous.and_then(|id| self.items.iter().position(|i| i.item_id == id));
                self.last_fetched = Some(Local::now());
            }
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn dismiss_dialog(&mut self) {
        self.dialogs.pop_front();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

fn precondition_notice(kind: CommandKind, err: CommandError) -> Notice {
    match err {
        CommandError::NoSelection => Notice::warning(kind.as_str(), err.to_string()),
        CommandError::InvalidItemId => {
            Notice::error(format!("{} Error", kind.as_str()), err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{CommandOutcome, Severity};
    use crate::models::Item;

    fn item(id: i64, name: &str) -> Item {
        Item {
            item_id: id,
            name: name.into(),
            ..Default::default()
        }
    }

    fn state_with(items: Vec<Item>) -> AppState {
        let mut state = AppState::new("http://127.0.0.1/orbital/api", true);
        state.items = items;
        state
    }

    fn complete(state: &mut AppState, outcome: CommandOutcome) {
        let (id, _) = state.pending.clone().unwrap();
        state.handle_response(NetworkResponse::Completed { id, outcome });
    }

    #[test]
    fn test_edit_without_selection_sends_nothing() {
        let mut state = state_with(vec![item(1, "Laptop")]);

        assert!(state.request_command(CommandKind::Edit).is_none());
        assert!(state.request_command(CommandKind::Delete).is_none());

        assert!(!state.is_loading);
        assert_eq!(state.next_request_id, 1);
        assert_eq!(state.dialogs.len(), 2);
        assert_eq!(state.dialogs[0].message, "No item selected!");
        assert_eq!(state.dialogs[0].severity, Severity::Warning);
        assert_eq!(state.dialogs[1].title, "Delete");
    }

    #[test]
    fn test_unsaved_selection_is_rejected() {
        let mut state = state_with(vec![item(0, "Draft")]);
        state.select_first();

        assert!(state.request_command(CommandKind::Delete).is_none());
        assert_eq!(state.selected_item_id(), Err(CommandError::InvalidItemId));
        assert_eq!(state.dialogs[0].title, "Delete Error");
    }

    #[test]
    fn test_edit_uses_selected_id() {
        let mut state = state_with(vec![item(4, "Desk"), item(9, "Chair")]);
        state.select_last();

        match state.request_command(CommandKind::Edit) {
            Some(NetworkCommand::Execute { command, .. }) => {
                assert_eq!(command, InventoryCommand::Edit { item_id: 9 })
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(state.is_loading);
    }

    #[test]
    fn test_busy_rejects_second_command() {
        let mut state = state_with(vec![]);
        assert!(state.request_command(CommandKind::Add).is_some());
        assert!(state.request_command(CommandKind::Fetch).is_none());
        assert!(state.dialogs.is_empty());
    }

    #[test]
    fn test_fetch_clears_list_immediately() {
        let mut state = state_with(vec![item(1, "Laptop")]);
        state.select_first();

        state.request_command(CommandKind::Fetch).unwrap();
        assert!(state.items.is_empty());
        assert_eq!(state.selected, None);

        complete(
            &mut state,
            CommandOutcome {
                notices: vec![Notice::error("Fetch Error", "Connection failed")],
                listing: Listing::Cleared,
            },
        );
        assert!(state.items.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.dialogs.len(), 1);
    }

    #[test]
    fn test_replaced_listing_keeps_selected_item() {
        let mut state = state_with(vec![item(1, "Laptop"), item(2, "Mouse")]);
        state.select_last();
        state.request_command(CommandKind::Add).unwrap();

        complete(
            &mut state,
            CommandOutcome {
                notices: vec![Notice::info("Add Item", "Item created successfully")],
                listing: Listing::Replaced(vec![item(1, "Laptop"), item(3, "USB Mouse"), item(2, "Mouse")]),
            },
        );
        assert_eq!(state.selected, Some(2));
        assert!(state.last_fetched.is_some());
    }

    #[test]
    fn test_dialogs_shown_in_order() {
        let mut state = state_with(vec![]);
        state.request_command(CommandKind::Add).unwrap();
        complete(
            &mut state,
            CommandOutcome {
                notices: vec![
                    Notice::info("Add Item", "Item created successfully"),
                    Notice::error("Fetch Error", "HTTP 500 Error. Response: "),
                ],
                listing: Listing::Cleared,
            },
        );

        let render = state.to_render_state();
        assert_eq!(render.dialog.unwrap().title, "Add Item");
        assert_eq!(render.queued_dialogs, 1);

        state.dismiss_dialog();
        assert_eq!(state.to_render_state().dialog.unwrap().title, "Fetch Error");
        state.dismiss_dialog();
        assert!(state.to_render_state().dialog.is_none());
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = state_with(vec![]);
        state.request_command(CommandKind::Fetch).unwrap();
        state.handle_response(NetworkResponse::Completed {
            id: 999,
            outcome: CommandOutcome::default(),
        });
        assert!(state.is_loading);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = state_with(vec![item(1, "A"), item(2, "B")]);
        state.select_prev();
        assert_eq!(state.selected, Some(0));
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, Some(1));

        let mut empty = state_with(vec![]);
        empty.select_next();
        assert_eq!(empty.selected, None);
    }
}
