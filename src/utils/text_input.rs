use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which characters a [`TextInput`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFilter {
    /// Any printable character
    #[default]
    Any,
    /// ASCII digits only
    Digits,
}

impl InputFilter {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputFilter::Any => !c.is_control(),
            InputFilter::Digits => c.is_ascii_digit(),
        }
    }
}

/// A text input field with encapsulated state.
///
/// Characters the filter rejects are dropped at insertion time, so the
/// field always holds its last valid value.
///
/// # Example
/// ```
/// use mindfulbet::utils::text_input::TextInput;
///
/// let mut input = TextInput::numeric(9);
/// for c in "4a5".chars() {
///     input.insert_char(c);
/// }
/// assert_eq!(input.text(), "45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in chars, not bytes
    cursor: usize,
    filter: InputFilter,
    max_chars: Option<usize>,
}

impl TextInput {
    /// Create a new empty text input accepting any printable character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a digits-only input holding at most `max_digits` characters.
    pub fn numeric(max_digits: usize) -> Self {
        Self {
            filter: InputFilter::Digits,
            max_chars: Some(max_digits),
            ..Self::default()
        }
    }

    /// Create a text input with initial text. Rejected characters are dropped.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter(&self) -> InputFilter {
        self.filter
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Replace the text, keeping only accepted characters, and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.clear();
        for c in text.into().chars() {
            self.insert_char(c);
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor.
    ///
    /// Returns false when the character was rejected by the filter or the
    /// length limit.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.filter.accepts(c) {
            return false;
        }
        if self.max_chars.is_some_and(|max| self.char_count() >= max) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle an editing action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Handle a key event while the field has focus.
    ///
    /// Plain characters are typed into the field even when the keymap binds
    /// them to something (e.g. `x` in the vim preset); everything else goes
    /// through the mapped action. Returns true if the key was consumed.
    pub fn handle_key_event(&mut self, key: &KeyEvent, action: Option<Action>) -> bool {
        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                // Rejected characters are still consumed so they never
                // trigger a global shortcut while typing.
                self.insert_char(c);
                return true;
            }
        }
        match action {
            Some(action) => self.handle_action(action),
            None => false,
        }
    }

    /// Check if an action is safe to process when a text input is focused.
    ///
    /// Field navigation, leaving the field and saving go through; global
    /// shortcuts bound to plain keys (`q`, `?`, digits) are suppressed so the
    /// key can be typed.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextTab
                | Action::PrevTab
                | Action::Save
                | Action::NextScreen
                | Action::PrevScreen
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}
