//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::messages::{InventoryCommand, Notice, RenderState};
use crate::models::Item;

/// Main application state - pure data, no I/O
///
/// `items` is kept in step with the rendered list, so a list position maps
/// straight to an item id without reading the displayed text back.
pub struct AppState {
    // Item list
    pub items: Vec<Item>,
    pub selected: Option<usize>,

    // Command in flight
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending: Option<(u64, InventoryCommand)>,

    // Modal dialogs, shown front first
    pub dialogs: VecDeque<Notice>,
    pub show_help: bool,

    // Connection info for the status bar
    pub base_url: String,
    pub has_token: bool,
    pub last_fetched: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new(base_url: impl Into<String>, has_token: bool) -> Self {
        AppState {
            items: Vec::new(),
            selected: None,
            is_loading: false,
            next_request_id: 1,
            pending: None,
            dialogs: VecDeque::new(),
            show_help: false,
            base_url: base_url.into(),
            has_token,
            last_fetched: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            items: self.items.clone(),
            selected: self.selected,
            is_loading: self.is_loading,
            loading_label: self.pending.as_ref().map(|(_, cmd)| cmd.label()),
            dialog: self.dialogs.front().cloned(),
            queued_dialogs: self.dialogs.len().saturating_sub(1),
            show_help: self.show_help,
            base_url: self.base_url.clone(),
            has_token: self.has_token,
            last_fetched: self.last_fetched,
        }
    }
}
