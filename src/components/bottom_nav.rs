//! Bottom navigation bar.
//!
//! One item per destination in registry order, each drawn as an icon above
//! its title. The item for the current destination is highlighted; the bar
//! holds no state of its own.

use crate::icons::Icons;
use crate::state::Destination;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows used by the bar: a top border, the icon row and the title row.
pub const BOTTOM_NAV_HEIGHT: u16 = 3;

pub struct BottomNav {
    current: Destination,
    icons: Icons,
}

impl BottomNav {
    pub fn new(current: Destination, icons: Icons) -> Self {
        Self { current, icons }
    }

    /// Split the bar into one equally wide slot per destination.
    pub fn item_areas(area: Rect) -> Vec<Rect> {
        let count = Destination::ALL.len() as u32;
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(Destination::ALL.iter().map(|_| Constraint::Ratio(1, count)))
            .split(area)
            .to_vec()
    }

    /// The destination whose item covers the cell at (`column`, `row`), if any.
    pub fn item_at(area: Rect, column: u16, row: u16) -> Option<Destination> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        Self::item_areas(area)
            .iter()
            .position(|slot| column >= slot.x && column < slot.x + slot.width)
            .and_then(Destination::from_index)
    }
}

impl Widget for BottomNav {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style(false))
            .style(t.surface_style());
        block.render(area, buf);

        for (dest, slot) in Destination::ALL.iter().zip(Self::item_areas(area)) {
            let inner = Rect {
                y: slot.y + 1,
                height: slot.height.saturating_sub(1),
                ..slot
            };
            let selected = *dest == self.current;
            let style = if selected {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            let lines = vec![
                Line::from(self.icons.destination(*dest)),
                Line::from(dest.title()),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(style)
                .render(inner, buf);
        }
    }
}
