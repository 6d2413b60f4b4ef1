//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The four inventory commands offered by the shell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandKind {
    Fetch,
    Add,
    Edit,
    Delete,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Fetch => "Fetch",
            CommandKind::Add => "Add",
            CommandKind::Edit => "Edit",
            CommandKind::Delete => "Delete",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Run(CommandKind),

    // Selection
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    // Popups
    DismissDialog,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on what is on screen
pub fn key_to_ui_event(key: KeyEvent, show_dialog: bool, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // A dialog is modal: acknowledge it or leave
    if show_dialog {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(UiEvent::DismissDialog),
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('f') | KeyCode::F(5) => Some(UiEvent::Run(CommandKind::Fetch)),
        KeyCode::Char('a') => Some(UiEvent::Run(CommandKind::Add)),
        KeyCode::Char('e') => Some(UiEvent::Run(CommandKind::Edit)),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::Run(CommandKind::Delete)),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Home | KeyCode::Char('g') => Some(UiEvent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(UiEvent::SelectLast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('f')), false, false),
            Some(UiEvent::Run(CommandKind::Fetch))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Delete), false, false),
            Some(UiEvent::Run(CommandKind::Delete))
        );
    }

    #[test]
    fn test_dialog_is_modal() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), true, false), None);
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), true, false),
            Some(UiEvent::DismissDialog)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, true, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('e')), false, true),
            Some(UiEvent::CloseHelp)
        );
    }
}
