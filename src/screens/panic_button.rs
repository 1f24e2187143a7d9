//! Panic button screen.

use crate::components::Header;
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::Destination;
use crate::styles::theme;
use crate::utils::center_rect;
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

pub const BUTTON_LABEL: &str = "Preciso de Ajuda Agora";
pub const SUGGESTIONS_TITLE: &str = "Sugestões de Atividades:";
pub const SUGGESTIONS: [&str; 3] = [
    "Faça 10 minutos de meditação",
    "Caminhe pelo quarteirão",
    "Assista a um vídeo engraçado",
];

const BUTTON_WIDTH: u16 = 36;
const BUTTON_HEIGHT: u16 = 5;

#[derive(Debug, Default)]
pub struct PanicButtonScreen {
    /// Where the button was last drawn, for mouse clicks
    button_area: Rect,
}

impl PanicButtonScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for PanicButtonScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let header_height = Header::render(frame, area, Destination::PanicButton.title(), None);
        let body = Rect {
            y: area.y + header_height,
            height: area.height.saturating_sub(header_height),
            ..area
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(body);

        self.button_area = center_rect(rows[0], BUTTON_WIDTH, BUTTON_HEIGHT);
        let button = Paragraph::new(BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(t.button_style(true))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(t.border_type(true))
                    .border_style(t.border_style(true))
                    .padding(Padding::vertical(1)),
            );
        frame.render_widget(button, self.button_area);

        let mut lines = vec![Line::styled(
            SUGGESTIONS_TITLE,
            t.text_style().add_modifier(Modifier::BOLD),
        )];
        lines.extend(SUGGESTIONS.iter().map(|s| {
            Line::from(vec![
                Span::styled(format!("  {} ", ctx.icons.bullet()), t.emphasis_style()),
                Span::styled(*s, t.text_style()),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), rows[2]);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match event {
            Event::Key(key) => match ctx.action_for(&key) {
                Some(Action::Confirm | Action::ToggleSelect) => ScreenAction::PanicActivated,
                _ => ScreenAction::None,
            },
            Event::Mouse(mouse)
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self
                        .button_area
                        .contains(Position::new(mouse.column, mouse.row)) =>
            {
                ScreenAction::PanicActivated
            }
            _ => ScreenAction::None,
        })
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Pedir ajuda",
            keymap.get_key_display_for_action(Action::Confirm)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    #[test]
    fn test_enter_activates() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = PanicButtonScreen::new();
        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            screen.handle_event(enter, &ctx).unwrap(),
            ScreenAction::PanicActivated
        );
    }

    #[test]
    fn test_click_outside_button_does_nothing() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = PanicButtonScreen::new();
        screen.button_area = Rect::new(10, 5, 20, 5);

        let click = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            screen.handle_event(click(0, 0), &ctx).unwrap(),
            ScreenAction::None
        );
        assert_eq!(
            screen.handle_event(click(12, 6), &ctx).unwrap(),
            ScreenAction::PanicActivated
        );
    }
}
