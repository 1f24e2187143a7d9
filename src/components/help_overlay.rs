//! Help overlay
//!
//! Lists the active keybindings grouped by category. Any key closes it.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup = center_popup(area, 90, 90);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Atalhos - {} ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_type(t.border_type(true))
            .border_style(t.border_style(true))
            .style(t.surface_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            chunks[0],
        );

        let footer = format!(
            "Edite os atalhos em: {}\nPressione qualquer tecla para fechar",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[1],
        );
    }

    /// One heading per category followed by its bindings, in first-seen order.
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();

        let mut categories: Vec<&'static str> = Vec::new();
        for binding in &bindings {
            let category = binding.action.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut lines = Vec::new();
        for category in categories {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(
                format!("  {}", category),
                t.emphasis_style().add_modifier(Modifier::BOLD),
            ));
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:14}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_appear_once() {
        let lines = HelpOverlay::binding_lines(&Keymap::default());
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text.iter().filter(|l| l.trim() == "Screens").count(), 1);
        assert!(text.iter().any(|l| l.contains("Go to Limites")));
    }
}
