//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::messages::network::Notice;
use crate::models::Item;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Item list
    pub items: Vec<Item>,
    pub selected: Option<usize>,

    // Busy indicator
    pub is_loading: bool,
    pub loading_label: Option<&'static str>,

    // Dialogs: the front of the queue and how many wait behind it
    pub dialog: Option<Notice>,
    pub queued_dialogs: usize,

    pub show_help: bool,

    // Status bar
    pub base_url: String,
    pub has_token: bool,
    pub last_fetched: Option<DateTime<Local>>,
}

impl RenderState {
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items.get(i))
    }
}
