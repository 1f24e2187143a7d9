//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use crate::state::Destination;
use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation within a screen ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Move left (mood row, cursor in a text field)
    MoveLeft,
    /// Move right (mood row, cursor in a text field)
    MoveRight,
    /// Jump to start of line/input
    Home,
    /// Jump to end of line/input
    End,

    // ============ Selection & Confirmation ============
    /// Activate the focused element (Enter)
    Confirm,
    /// Leave a text field / close overlay (Esc)
    Cancel,
    /// Toggle selection state (Space)
    ToggleSelect,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
    /// Save the current form
    Save,
    /// Reload figures from the tracker
    Refresh,

    // ============ Bottom navigation ============
    /// Go to the next destination in the navigation bar
    NextScreen,
    /// Go to the previous destination in the navigation bar
    PrevScreen,
    ShowDashboard,
    ShowLimits,
    ShowJournal,
    ShowPanicButton,
    ShowSupport,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Field navigation ============
    /// Move focus to the next field
    NextTab,
    /// Move focus to the previous field
    PrevTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Home",
            Action::End => "End",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Leave field",
            Action::ToggleSelect => "Toggle selection",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Save => "Save",
            Action::Refresh => "Refresh",
            Action::NextScreen => "Next screen",
            Action::PrevScreen => "Previous screen",
            Action::ShowDashboard => "Go to Dashboard",
            Action::ShowLimits => "Go to Limites",
            Action::ShowJournal => "Go to Diário",
            Action::ShowPanicButton => "Go to Pânico",
            Action::ShowSupport => "Go to Suporte",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel | Action::ToggleSelect => "Selection",

            Action::Quit | Action::Help | Action::Save | Action::Refresh => "Global",

            Action::NextScreen
            | Action::PrevScreen
            | Action::ShowDashboard
            | Action::ShowLimits
            | Action::ShowJournal
            | Action::ShowPanicButton
            | Action::ShowSupport => "Screens",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab | Action::PrevTab => "Field Navigation",
        }
    }

    /// The destination this action jumps to, if it is a direct jump.
    pub fn destination(&self) -> Option<Destination> {
        match self {
            Action::ShowDashboard => Some(Destination::Dashboard),
            Action::ShowLimits => Some(Destination::Limits),
            Action::ShowJournal => Some(Destination::Journal),
            Action::ShowPanicButton => Some(Destination::PanicButton),
            Action::ShowSupport => Some(Destination::Support),
            _ => None,
        }
    }

    /// The direct-jump action for a destination.
    pub fn show(dest: Destination) -> Self {
        match dest {
            Destination::Dashboard => Action::ShowDashboard,
            Destination::Limits => Action::ShowLimits,
            Destination::Journal => Action::ShowJournal,
            Destination::PanicButton => Action::ShowPanicButton,
            Destination::Support => Action::ShowSupport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::MoveUp.description(), "Move up");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::Quit.category(), "Global");
        assert_eq!(Action::ShowLimits.category(), "Screens");
    }

    #[test]
    fn test_show_and_destination_agree() {
        for dest in Destination::ALL {
            assert_eq!(Action::show(dest).destination(), Some(dest));
        }
        assert_eq!(Action::Confirm.destination(), None);
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::ShowPanicButton).unwrap();
        assert_eq!(json, "\"show_panic_button\"");
    }

    #[test]
    fn test_action_deserialization() {
        let action: Action = serde_json::from_str("\"next_screen\"").unwrap();
        assert_eq!(action, Action::NextScreen);
    }
}
