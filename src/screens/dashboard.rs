//! Dashboard screen: the three tracked figures as cards.

use crate::components::{Header, MetricCard};
use crate::keymap::{Action, Keymap};
use crate::models::DashboardMetrics;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::Destination;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;

pub const DAYS_LABEL: &str = "Dias Sem Jogar";
pub const PLAY_TIME_LABEL: &str = "Tempo de Jogo (Semana)";
pub const LOSSES_LABEL: &str = "Perdas Acumuladas (Mês)";

const CARD_HEIGHT: u16 = 4;

#[derive(Debug, Default)]
pub struct DashboardScreen {
    metrics: DashboardMetrics,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    pub fn set_metrics(&mut self, metrics: DashboardMetrics) {
        self.metrics = metrics;
    }

    /// Label and display value for each card, top to bottom.
    pub fn cards(&self) -> [(&'static str, String); 3] {
        [
            (DAYS_LABEL, self.metrics.days_display()),
            (PLAY_TIME_LABEL, self.metrics.play_time_display()),
            (LOSSES_LABEL, self.metrics.losses_display()),
        ]
    }
}

impl Screen for DashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let header_height = Header::render(frame, area, Destination::Dashboard.title(), None);

        let body = Rect {
            y: area.y + header_height,
            height: area.height.saturating_sub(header_height),
            ..area
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(CARD_HEIGHT),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Min(0),
            ])
            .split(body);

        for ((label, value), row) in self.cards().iter().zip(rows.iter()) {
            frame.render_widget(MetricCard::new(label, value), *row);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        Ok(match ctx.action_for(&key) {
            Some(Action::Refresh) => ScreenAction::RefreshMetrics,
            _ => ScreenAction::None,
        })
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Atualizar",
            keymap.get_key_display_for_action(Action::Refresh)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Money;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    #[test]
    fn test_cards_before_metrics_arrive() {
        let screen = DashboardScreen::new();
        for (_, value) in screen.cards() {
            assert_eq!(value, DashboardMetrics::UNAVAILABLE);
        }
    }

    #[test]
    fn test_cards_show_metrics() {
        let mut screen = DashboardScreen::new();
        screen.set_metrics(DashboardMetrics {
            days_without_playing: Some(15),
            weekly_play_time: Some(Duration::from_secs(2 * 3600 + 45 * 60)),
            monthly_losses: Some(Money::from_reais(520)),
        });
        let cards = screen.cards();
        assert_eq!(cards[0], (DAYS_LABEL, "15".to_string()));
        assert_eq!(cards[1], (PLAY_TIME_LABEL, "2h 45min".to_string()));
        assert_eq!(cards[2], (LOSSES_LABEL, "R$ 520,00".to_string()));
    }

    #[test]
    fn test_refresh_key() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut screen = DashboardScreen::new();
        let key = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        assert_eq!(
            screen.handle_event(key, &ctx).unwrap(),
            ScreenAction::RefreshMetrics
        );
    }
}
