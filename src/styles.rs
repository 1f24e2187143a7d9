//! Theme provider
//!
//! A static palette plus "typography" expressed as text modifiers. Screens
//! read the active theme through [`theme()`]; nothing in a theme changes
//! after it has been installed with [`init_theme`].

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Marker shown next to the selected row of a list
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

static THEME: RwLock<Theme> = RwLock::new(Theme::DARK);

/// Install the theme used by every screen
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl ThemeType {
    pub fn to_config_string(&self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::NoColor => "nocolor",
        }
    }
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Titles, selected navigation item, buttons
    pub primary: Color,
    /// Accents: metric values, selected mood
    pub secondary: Color,
    /// Text drawn on top of `primary`
    pub on_primary: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,

    pub border: Color,
    /// Card and navigation bar fill
    pub surface: Color,
    /// Screen background (Reset keeps the terminal default)
    pub background: Color,
}

impl Theme {
    const DARK: Theme = Theme {
        theme_type: ThemeType::Dark,
        primary: Color::Rgb(187, 134, 252),
        secondary: Color::Rgb(3, 218, 197),
        on_primary: Color::Black,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
        text: Color::White,
        text_muted: Color::DarkGray,
        border: Color::DarkGray,
        surface: Color::Reset,
        background: Color::Reset,
    };

    /// The light scheme: purple primary on a pale grey background
    const LIGHT: Theme = Theme {
        theme_type: ThemeType::Light,
        primary: Color::Rgb(0x62, 0x00, 0xEE),
        secondary: Color::Rgb(0x03, 0xDA, 0xC5),
        on_primary: Color::White,
        success: Color::Green,
        warning: Color::Rgb(180, 120, 0),
        error: Color::Red,
        text: Color::Black,
        text_muted: Color::DarkGray,
        border: Color::Gray,
        surface: Color::Rgb(0xFF, 0xFF, 0xFF),
        background: Color::Rgb(0xF0, 0xF0, 0xF0),
    };

    const NO_COLOR: Theme = Theme {
        theme_type: ThemeType::NoColor,
        primary: Color::Reset,
        secondary: Color::Reset,
        on_primary: Color::Reset,
        success: Color::Reset,
        warning: Color::Reset,
        error: Color::Reset,
        text: Color::Reset,
        text_muted: Color::Reset,
        border: Color::Reset,
        surface: Color::Reset,
        background: Color::Reset,
    };

    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::DARK,
            ThemeType::Light => Self::LIGHT,
            ThemeType::NoColor => Self::NO_COLOR,
        }
    }

    fn colored(&self) -> bool {
        self.theme_type != ThemeType::NoColor
    }

    // === Typography ===

    /// Large bold screen heading ("Dashboard", "Definir Limites", ...)
    pub fn screen_title_style(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.colored() {
            style.fg(self.primary)
        } else {
            style
        }
    }

    /// Card heading ("Dias Sem Jogar", ...)
    pub fn card_label_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.text).add_modifier(Modifier::ITALIC)
        } else {
            Style::default().add_modifier(Modifier::ITALIC)
        }
    }

    /// The big figure inside a card
    pub fn card_value_style(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.colored() {
            style.fg(self.secondary)
        } else {
            style
        }
    }

    // === Style Helpers ===

    pub fn text_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.text)
        } else {
            Style::default()
        }
    }

    pub fn muted_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.text_muted)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    pub fn emphasis_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.secondary)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn success_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.success)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn warning_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.warning)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn error_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.error)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        match (self.colored(), focused) {
            (true, true) => Style::default().fg(self.primary),
            (true, false) => Style::default().fg(self.border),
            (false, true) => Style::default().add_modifier(Modifier::BOLD),
            (false, false) => Style::default(),
        }
    }

    pub fn border_type(&self, focused: bool) -> BorderType {
        if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        }
    }

    /// Selected row / selected navigation item
    pub fn highlight_style(&self) -> Style {
        if self.colored() {
            Style::default()
                .fg(self.on_primary)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        }
    }

    /// Push button; focused buttons are filled with the primary color
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            self.highlight_style()
        } else if self.colored() {
            Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn surface_style(&self) -> Style {
        if self.colored() {
            Style::default().bg(self.surface)
        } else {
            Style::default()
        }
    }

    pub fn background_style(&self) -> Style {
        if self.colored() {
            Style::default().bg(self.background)
        } else {
            Style::default()
        }
    }
}
