//! Screen trait and associated types.
//!
//! Screens own their form state and never talk to collaborators directly.
//! Event handling returns a [`ScreenAction`] and the app carries it out.

use crate::config::Config;
use crate::icons::Icons;
use crate::keymap::{Action, Keymap};
use crate::models::{JournalEntry, Limits};
use crate::state::Destination;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources needed for rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub icons: &'a Icons,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, icons: &'a Icons) -> Self {
        Self { config, icons }
    }
}

/// Read-only resources needed for event handling.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }

    /// The action bound to a key in the user's keymap.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.config.keymap.action_for(key)
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Nothing to do.
    None,
    /// Move to another destination.
    Navigate(Destination),
    /// Hand the limits form to the tracker.
    SaveLimits(Limits),
    /// Hand a journal entry to the tracker.
    SaveEntry(JournalEntry),
    /// Reload the dashboard figures.
    RefreshMetrics,
    /// The panic button was pressed.
    PanicActivated,
    /// Open a support link outside the terminal.
    OpenUri(String),
    /// Tell the user why nothing happened.
    ShowWarning(String),
    ShowHelp,
    Quit,
}

impl Default for ScreenAction {
    fn default() -> Self {
        Self::None
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     selected: usize,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match event {
///             Event::Key(key) if ctx.action_for(&key) == Some(Action::Confirm) => {
///                 Ok(ScreenAction::Navigate(Destination::Support))
///             }
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently being edited.
    ///
    /// When true, global shortcuts bound to plain keys are disabled so users
    /// can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Key hints for the footer, in `"keys: label | keys: label"` form.
    fn footer_hints(&self, _keymap: &Keymap) -> String {
        String::new()
    }

    /// Called after a save requested by this screen succeeded.
    fn on_saved(&mut self) {}

    /// Called when the screen is mounted.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called right before the screen is dropped.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
