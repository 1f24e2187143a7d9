use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// A bordered card with a label and a large value.
pub struct MetricCard<'a> {
    label: &'a str,
    value: &'a str,
}

impl<'a> MetricCard<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self { label, value }
    }
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(false))
            .border_style(t.border_style(false))
            .style(t.surface_style());
        let lines = vec![
            Line::styled(self.label, t.card_label_style()),
            Line::styled(self.value, t.card_value_style()),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
