use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Rows used by [`Header`]: title, subtitle and the bottom border.
pub const HEADER_HEIGHT: u16 = 3;

/// Screen heading shared by every screen
pub struct Header;

impl Header {
    /// Render the screen title in bold with an optional muted subtitle below.
    ///
    /// Returns the height used so callers can lay out the rest of the screen.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: Option<&str>) -> u16 {
        let t = theme();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(t.border_style(false))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::styled(title, t.screen_title_style())];
        if let Some(subtitle) = subtitle {
            lines.push(Line::styled(subtitle, t.muted_style()));
        }
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            inner,
        );

        HEADER_HEIGHT.min(area.height)
    }
}
