//! Text input widget for rendering [`TextInput`] instances.
//!
//! Draws a bordered field with the theme's focus styling and a placeholder
//! when empty. Use [`TextInputWidgetExt`] to also place the terminal cursor.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// A widget for rendering a TextInput with consistent styling.
///
/// # Example
/// ```
/// use mindfulbet::utils::TextInput;
/// use mindfulbet::widgets::TextInputWidget;
///
/// let input = TextInput::numeric(9);
/// let widget = TextInputWidget::new(&input)
///     .title("Limite de Tempo")
///     .placeholder("minutos")
///     .focused(true);
/// // frame.render_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// The text to draw: the value, or the placeholder when empty.
    fn display_text(&self) -> &str {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            text
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let t = theme();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(self.focused))
            .border_style(t.border_style(self.focused));
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Cursor cell inside `area`, clamped to the field width.
    fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.create_block().inner(area);
        let offset = self.input.cursor().min(inner.width.saturating_sub(1) as usize) as u16;
        Position::new(inner.x + offset, inner.y)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        Paragraph::new(self.display_text())
            .style(self.text_style())
            .block(block)
            .render(area, buf);
    }
}

/// Extension trait for Frame to render a TextInputWidget and place the cursor.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
