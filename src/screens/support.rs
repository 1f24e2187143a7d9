//! Support screen: links to professional help.

use crate::components::Header;
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::{SupportLink, SUPPORT_LINKS};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

pub const TITLE: &str = "Recursos de Suporte";

/// Rows per link: label and URL
const ITEM_HEIGHT: u16 = 2;

#[derive(Debug)]
pub struct SupportScreen {
    list_state: ListState,
    /// Inner list area from the last render, for mouse clicks
    list_area: Rect,
}

impl Default for SupportScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportScreen {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
            list_area: Rect::default(),
        }
    }

    pub fn selected_link(&self) -> Option<&'static SupportLink> {
        self.list_state.selected().and_then(|i| SUPPORT_LINKS.get(i))
    }

    fn select(&mut self, index: usize) {
        self.list_state
            .select(Some(index.min(SUPPORT_LINKS.len() - 1)));
    }

    fn open_selected(&self) -> ScreenAction {
        match self.selected_link() {
            Some(link) => ScreenAction::OpenUri(link.url.to_string()),
            None => ScreenAction::None,
        }
    }

    /// The link drawn at `row`, if any.
    fn link_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = usize::from((row - self.list_area.y) / ITEM_HEIGHT) + self.list_state.offset();
        (index < SUPPORT_LINKS.len()).then_some(index)
    }
}

impl Screen for SupportScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let header_height = Header::render(frame, area, TITLE, None);
        let body = Rect {
            y: area.y + header_height,
            height: area.height.saturating_sub(header_height),
            ..area
        };

        let items: Vec<ListItem> = SUPPORT_LINKS
            .iter()
            .map(|link| {
                ListItem::new(vec![
                    Line::styled(link.label, t.text_style().add_modifier(Modifier::BOLD)),
                    Line::from(vec![
                        Span::styled(format!("{} ", ctx.icons.external_link()), t.emphasis_style()),
                        Span::styled(link.url, t.muted_style()),
                    ]),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::uniform(1));
        self.list_area = block.inner(body);

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, body, &mut self.list_state);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) => {
                let selected = self.list_state.selected().unwrap_or(0);
                match ctx.action_for(&key) {
                    Some(Action::MoveUp) => self.select(selected.saturating_sub(1)),
                    Some(Action::MoveDown) => self.select(selected + 1),
                    Some(Action::Home) => self.select(0),
                    Some(Action::End) => self.select(SUPPORT_LINKS.len() - 1),
                    Some(Action::Confirm | Action::ToggleSelect) => {
                        return Ok(self.open_selected());
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.link_at(mouse.column, mouse.row) {
                    self.select(index);
                    return Ok(self.open_selected());
                }
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Mover | {}: Abrir",
            keymap.navigation_display(),
            keymap.get_key_display_for_action(Action::Confirm)
        )
    }
}
