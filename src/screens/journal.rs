//! Journal screen: pick a mood, describe the trigger, save.

use crate::components::Header;
use crate::keymap::{Action, Keymap};
use crate::models::{JournalEntry, Mood};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::TextInput;
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Diário de Sentimentos";
pub const MOOD_PROMPT: &str = "Como me sinto agora?";
pub const TRIGGER_PROMPT: &str = "O que me fez pensar em apostar?";
pub const TRIGGER_PLACEHOLDER: &str = "Descreva seu gatilho...";
pub const SAVE_LABEL: &str = "Salvar Entrada";
pub const MOOD_REQUIRED: &str = "Escolha como você se sente antes de salvar.";

const TRIGGER_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JournalFocus {
    #[default]
    Mood,
    Trigger,
    SaveButton,
}

impl JournalFocus {
    fn next(self) -> Self {
        match self {
            JournalFocus::Mood => JournalFocus::Trigger,
            JournalFocus::Trigger => JournalFocus::SaveButton,
            JournalFocus::SaveButton => JournalFocus::Mood,
        }
    }

    fn previous(self) -> Self {
        match self {
            JournalFocus::Mood => JournalFocus::SaveButton,
            JournalFocus::Trigger => JournalFocus::Mood,
            JournalFocus::SaveButton => JournalFocus::Trigger,
        }
    }
}

#[derive(Debug)]
pub struct JournalScreen {
    mood: Option<Mood>,
    /// Index into [`Mood::ALL`] of the chip under the cursor
    mood_cursor: usize,
    trigger: TextInput,
    focus: JournalFocus,
    editing: bool,
}

impl Default for JournalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalScreen {
    pub fn new() -> Self {
        Self {
            mood: None,
            mood_cursor: 0,
            trigger: TextInput::new().with_max_chars(TRIGGER_MAX_CHARS),
            focus: JournalFocus::default(),
            editing: false,
        }
    }

    pub fn selected_mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn focus(&self) -> JournalFocus {
        self.focus
    }

    pub fn trigger_text(&self) -> &str {
        self.trigger.text()
    }

    fn save(&self) -> ScreenAction {
        match self.mood {
            Some(mood) => {
                ScreenAction::SaveEntry(JournalEntry::new(mood, self.trigger.text_trimmed()))
            }
            None => ScreenAction::ShowWarning(MOOD_REQUIRED.to_string()),
        }
    }

    fn move_focus(&mut self, focus: JournalFocus) {
        self.focus = focus;
        self.editing = self.editing && focus == JournalFocus::Trigger;
    }

    fn handle_editing_key(&mut self, key: &KeyEvent, action: Option<Action>) -> ScreenAction {
        match action {
            Some(Action::Cancel) => self.editing = false,
            Some(Action::Confirm | Action::NextTab) => self.move_focus(self.focus.next()),
            Some(Action::PrevTab) => self.move_focus(self.focus.previous()),
            Some(Action::Save) => return self.save(),
            _ => {
                self.trigger.handle_key_event(key, action);
            }
        }
        ScreenAction::None
    }

    fn handle_browsing_key(&mut self, action: Option<Action>) -> ScreenAction {
        match (self.focus, action) {
            (_, Some(Action::Save)) => return self.save(),
            (_, Some(Action::MoveDown | Action::NextTab)) => self.move_focus(self.focus.next()),
            (_, Some(Action::MoveUp | Action::PrevTab)) => self.move_focus(self.focus.previous()),
            (JournalFocus::Mood, Some(Action::MoveLeft)) => {
                self.mood_cursor = self.mood_cursor.saturating_sub(1);
            }
            (JournalFocus::Mood, Some(Action::MoveRight)) => {
                self.mood_cursor = (self.mood_cursor + 1).min(Mood::ALL.len() - 1);
            }
            (JournalFocus::Mood, Some(Action::Confirm | Action::ToggleSelect)) => {
                self.mood = Mood::ALL.get(self.mood_cursor).copied();
            }
            (JournalFocus::Trigger, Some(Action::Confirm | Action::ToggleSelect)) => {
                self.editing = true;
            }
            (JournalFocus::SaveButton, Some(Action::Confirm | Action::ToggleSelect)) => {
                return self.save();
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn mood_line(&self, ctx: &RenderContext) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, mood) in Mood::ALL.iter().enumerate() {
            let selected = self.mood == Some(*mood);
            let marker = if selected {
                ctx.icons.radio_on()
            } else {
                ctx.icons.radio_off()
            };
            let under_cursor = self.focus == JournalFocus::Mood && self.mood_cursor == i;
            let style = match (under_cursor, selected) {
                (true, _) => t.highlight_style(),
                (false, true) => t.emphasis_style().add_modifier(Modifier::BOLD),
                (false, false) => t.text_style(),
            };
            spans.push(Span::styled(format!(" {} {} ", marker, mood.label()), style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Screen for JournalScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let header_height = Header::render(frame, area, TITLE, None);
        let body = Rect {
            y: area.y + header_height,
            height: area.height.saturating_sub(header_height),
            ..area
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // mood prompt
                Constraint::Length(1), // mood chips
                Constraint::Length(1),
                Constraint::Length(1), // trigger prompt
                Constraint::Length(3), // trigger field
                Constraint::Length(1),
                Constraint::Length(3), // save button
                Constraint::Min(0),
            ])
            .split(body);

        frame.render_widget(Paragraph::new(MOOD_PROMPT).style(t.text_style()), rows[0]);
        frame.render_widget(Paragraph::new(self.mood_line(ctx)), rows[1]);
        frame.render_widget(Paragraph::new(TRIGGER_PROMPT).style(t.text_style()), rows[3]);

        let trigger = TextInputWidget::new(&self.trigger)
            .placeholder(TRIGGER_PLACEHOLDER)
            .focused(self.focus == JournalFocus::Trigger);
        if self.is_input_focused() {
            frame.render_text_input_widget(trigger, rows[4]);
        } else {
            frame.render_widget(trigger, rows[4]);
        }

        let button_focused = self.focus == JournalFocus::SaveButton;
        let button = Paragraph::new(SAVE_LABEL)
            .alignment(Alignment::Center)
            .style(t.button_style(button_focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(t.border_type(button_focused))
                    .border_style(t.border_style(button_focused)),
            );
        frame.render_widget(button, rows[6]);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action_for(&key);
        Ok(if self.is_input_focused() {
            self.handle_editing_key(&key, action)
        } else {
            self.handle_browsing_key(action)
        })
    }

    fn is_input_focused(&self) -> bool {
        self.editing && self.focus == JournalFocus::Trigger
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        if self.is_input_focused() {
            format!(
                "{}: Sair do campo | {}: Salvar",
                keymap.get_key_display_for_action(Action::Cancel),
                keymap.get_key_display_for_action(Action::Save)
            )
        } else {
            format!(
                "{}: Mover | {}: Escolher | {}: Salvar",
                keymap.navigation_display(),
                keymap.get_key_display_for_action(Action::Confirm),
                keymap.get_key_display_for_action(Action::Save)
            )
        }
    }

    /// A saved entry clears the form for the next one.
    fn on_saved(&mut self) {
        self.mood = None;
        self.mood_cursor = 0;
        self.trigger.clear();
        self.move_focus(JournalFocus::Mood);
    }
}
