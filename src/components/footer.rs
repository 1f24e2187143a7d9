use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Key hint line drawn above the navigation bar
pub struct Footer;

impl Footer {
    /// Render hints written as `"label: keys | label: keys"`.
    ///
    /// Each part is split on `": "` so labels and keys get different styles.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        frame.render_widget(Paragraph::new(Self::line(text)).alignment(Alignment::Center), area);
    }

    fn line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(keys, t.emphasis_style().add_modifier(Modifier::BOLD)));
                    spans.push(Span::styled(": ", t.muted_style()));
                    spans.push(Span::styled(label, t.text_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_keeps_all_text() {
        let line = Footer::line("Enter: Abrir | 1-5: Telas | sem chave");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter: Abrir | 1-5: Telas | sem chave");
    }
}
