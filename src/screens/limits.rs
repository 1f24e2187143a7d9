//! Limits screen: time and spending limit form.
//!
//! Both fields are digits-only. Focus moves between the two fields and the
//! save button; a field must be entered (Enter) before typing goes into it,
//! which keeps the digit keys free for screen switching otherwise.

use crate::components::Header;
use crate::keymap::{Action, Keymap};
use crate::models::{Limits, Money};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::TextInput;
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Definir Limites";
pub const TIME_LIMIT_LABEL: &str = "Limite de Tempo";
pub const SPENDING_LIMIT_LABEL: &str = "Limite de Gasto";
pub const SAVE_LABEL: &str = "Salvar Limites";

/// Longest accepted value, in digits. Keeps every value inside `u32`.
pub const MAX_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitsFocus {
    #[default]
    TimeLimit,
    SpendingLimit,
    SaveButton,
}

impl LimitsFocus {
    fn next(self) -> Self {
        match self {
            LimitsFocus::TimeLimit => LimitsFocus::SpendingLimit,
            LimitsFocus::SpendingLimit => LimitsFocus::SaveButton,
            LimitsFocus::SaveButton => LimitsFocus::TimeLimit,
        }
    }

    fn previous(self) -> Self {
        match self {
            LimitsFocus::TimeLimit => LimitsFocus::SaveButton,
            LimitsFocus::SpendingLimit => LimitsFocus::TimeLimit,
            LimitsFocus::SaveButton => LimitsFocus::SpendingLimit,
        }
    }

    fn is_field(self) -> bool {
        self != LimitsFocus::SaveButton
    }
}

#[derive(Debug)]
pub struct LimitsScreen {
    time_limit: TextInput,
    spending_limit: TextInput,
    focus: LimitsFocus,
    editing: bool,
}

impl Default for LimitsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LimitsScreen {
    pub fn new() -> Self {
        Self {
            time_limit: TextInput::numeric(MAX_DIGITS),
            spending_limit: TextInput::numeric(MAX_DIGITS),
            focus: LimitsFocus::default(),
            editing: false,
        }
    }

    pub fn focus(&self) -> LimitsFocus {
        self.focus
    }

    pub fn time_limit_text(&self) -> &str {
        self.time_limit.text()
    }

    pub fn spending_limit_text(&self) -> &str {
        self.spending_limit.text()
    }

    /// The form as submitted. Blank fields become `None`.
    pub fn limits(&self) -> Limits {
        Limits {
            time_limit_minutes: parse_digits(self.time_limit.text()),
            spending_limit: parse_digits(self.spending_limit.text())
                .map(|reais| Money::from_reais(i64::from(reais))),
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LimitsFocus::TimeLimit => Some(&mut self.time_limit),
            LimitsFocus::SpendingLimit => Some(&mut self.spending_limit),
            LimitsFocus::SaveButton => None,
        }
    }

    fn move_focus(&mut self, focus: LimitsFocus) {
        self.focus = focus;
        self.editing = self.editing && focus.is_field();
    }

    fn handle_editing_key(&mut self, key: &KeyEvent, action: Option<Action>) -> ScreenAction {
        match action {
            Some(Action::Cancel) => self.editing = false,
            Some(Action::Confirm | Action::NextTab) => self.move_focus(self.focus.next()),
            Some(Action::PrevTab) => self.move_focus(self.focus.previous()),
            Some(Action::Save) => return ScreenAction::SaveLimits(self.limits()),
            _ => {
                if let Some(input) = self.focused_input() {
                    input.handle_key_event(key, action);
                }
            }
        }
        ScreenAction::None
    }

    fn handle_browsing_key(&mut self, action: Option<Action>) -> ScreenAction {
        match action {
            Some(Action::MoveDown | Action::NextTab) => self.move_focus(self.focus.next()),
            Some(Action::MoveUp | Action::PrevTab) => self.move_focus(self.focus.previous()),
            Some(Action::Confirm | Action::ToggleSelect) if self.focus.is_field() => {
                self.editing = true;
            }
            Some(Action::Confirm | Action::ToggleSelect | Action::Save) => {
                return ScreenAction::SaveLimits(self.limits());
            }
            _ => {}
        }
        ScreenAction::None
    }
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() {
        None
    } else {
        text.parse().ok()
    }
}

impl Screen for LimitsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
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
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(body);

        let fields = [
            (&self.time_limit, TIME_LIMIT_LABEL, "minutos", LimitsFocus::TimeLimit, rows[0]),
            (&self.spending_limit, SPENDING_LIMIT_LABEL, "reais", LimitsFocus::SpendingLimit, rows[2]),
        ];
        for (input, label, placeholder, focus, row) in fields {
            let focused = self.focus == focus;
            let widget = TextInputWidget::new(input)
                .title(label)
                .placeholder(placeholder)
                .focused(focused);
            if focused && self.editing {
                frame.render_text_input_widget(widget, row);
            } else {
                frame.render_widget(widget, row);
            }
        }

        let button_focused = self.focus == LimitsFocus::SaveButton;
        let button = Paragraph::new(SAVE_LABEL)
            .alignment(Alignment::Center)
            .style(t.button_style(button_focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(t.border_type(button_focused))
                    .border_style(t.border_style(button_focused)),
            );
        frame.render_widget(button, rows[4]);
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
        self.editing && self.focus.is_field()
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
                "{}: Mover | {}: Editar | {}: Salvar",
                keymap.navigation_display(),
                keymap.get_key_display_for_action(Action::Confirm),
                keymap.get_key_display_for_action(Action::Save)
            )
        }
    }
}
