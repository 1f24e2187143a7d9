use ratatui::prelude::*;

/// Split an area into content and the bottom navigation bar.
///
/// Returns `(content, nav_bar)`. The bar keeps its height as long as the
/// terminal is tall enough to show it at all.
pub fn create_standard_layout(area: Rect, nav_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(nav_height)])
        .split(area);
    (chunks[0], chunks[1])
}

/// A rectangle of at most `width` x `height` centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// A rectangle taking the given percentages of `area`, centered.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width.saturating_mul(percent_x) / 100;
    let height = area.height.saturating_mul(percent_y) / 100;
    center_rect(area, width, height)
}
