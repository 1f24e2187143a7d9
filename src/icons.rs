//! Icon provider for the navigation bar and screens.
//!
//! Supports NerdFonts glyphs, plain Unicode symbols and an ASCII fallback.
//! The set is picked from `MINDFULBET_ICONS`, then the config file, then a
//! guess based on the terminal program.

use crate::state::Destination;
use std::env;

const ICONS_ENV: &str = "MINDFULBET_ICONS";

/// Available icon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// NerdFonts icons (requires NerdFont-patched font)
    NerdFonts,
    /// Unicode symbols (works in most modern terminals)
    Unicode,
    /// ASCII-only fallback (maximum compatibility)
    Ascii,
}

impl IconSet {
    /// Parse a config or environment value. `auto` and unknown values give `None`.
    pub fn from_config_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "nerd" | "nerdfont" | "nerdfonts" => Some(IconSet::NerdFonts),
            "unicode" | "emoji" => Some(IconSet::Unicode),
            "ascii" | "plain" => Some(IconSet::Ascii),
            _ => None,
        }
    }

    /// Detect the best icon set for the current terminal
    pub fn detect() -> Self {
        if let Some(set) = env::var(ICONS_ENV)
            .ok()
            .and_then(|v| Self::from_config_str(&v))
        {
            return set;
        }

        let nerd_friendly = env::var("TERM_PROGRAM").is_ok_and(|p| {
            matches!(
                p.as_str(),
                "iTerm.app" | "WezTerm" | "Alacritty" | "kitty" | "Ghostty"
            )
        });
        if nerd_friendly {
            IconSet::NerdFonts
        } else {
            IconSet::Unicode
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconSet::NerdFonts => "NerdFonts",
            IconSet::Unicode => "Unicode",
            IconSet::Ascii => "ASCII",
        }
    }
}

/// Icon provider that returns appropriate icons based on the selected icon set
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    icon_set: IconSet,
}

impl Default for Icons {
    fn default() -> Self {
        Self::new()
    }
}

impl Icons {
    /// Create a new icon provider with auto-detection
    pub fn new() -> Self {
        Self {
            icon_set: IconSet::detect(),
        }
    }

    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    /// Priority: `MINDFULBET_ICONS` > config value > auto-detect
    pub fn from_config(config: &crate::config::Config) -> Self {
        if env::var(ICONS_ENV).is_ok() {
            return Self::new();
        }
        match IconSet::from_config_str(&config.icon_set) {
            Some(set) => Self::with_icon_set(set),
            None => Self::new(),
        }
    }

    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    /// Icon shown next to a destination in the navigation bar
    pub fn destination(&self, dest: Destination) -> &'static str {
        match (self.icon_set, dest) {
            (IconSet::NerdFonts, Destination::Dashboard) => "\u{f015}",
            (IconSet::NerdFonts, Destination::Limits) => "\u{f013}",
            (IconSet::NerdFonts, Destination::Journal) => "\u{f03a}",
            (IconSet::NerdFonts, Destination::PanicButton) => "\u{f021}",
            (IconSet::NerdFonts, Destination::Support) => "\u{f041}",
            (IconSet::Unicode, Destination::Dashboard) => "⌂",
            (IconSet::Unicode, Destination::Limits) => "⚙",
            (IconSet::Unicode, Destination::Journal) => "☰",
            (IconSet::Unicode, Destination::PanicButton) => "↻",
            (IconSet::Unicode, Destination::Support) => "⚑",
            (IconSet::Ascii, Destination::Dashboard) => "[H]",
            (IconSet::Ascii, Destination::Limits) => "[L]",
            (IconSet::Ascii, Destination::Journal) => "[J]",
            (IconSet::Ascii, Destination::PanicButton) => "[!]",
            (IconSet::Ascii, Destination::Support) => "[S]",
        }
    }

    pub fn radio_on(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f111}",
            IconSet::Unicode => "●",
            IconSet::Ascii => "(x)",
        }
    }

    pub fn radio_off(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f10c}",
            IconSet::Unicode => "○",
            IconSet::Ascii => "( )",
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.icon_set {
            IconSet::Ascii => "-",
            _ => "•",
        }
    }

    pub fn external_link(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f08e}",
            IconSet::Unicode => "↗",
            IconSet::Ascii => "->",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_from_config_str() {
        assert_eq!(IconSet::from_config_str("nerd"), Some(IconSet::NerdFonts));
        assert_eq!(IconSet::from_config_str("ASCII"), Some(IconSet::Ascii));
        assert_eq!(IconSet::from_config_str("auto"), None);
    }

    #[test]
    fn test_every_destination_has_an_icon_in_every_set() {
        for set in [IconSet::NerdFonts, IconSet::Unicode, IconSet::Ascii] {
            let icons = Icons::with_icon_set(set);
            for dest in Destination::ALL {
                assert!(!icons.destination(dest).is_empty());
            }
        }
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = Icons::with_icon_set(IconSet::Ascii);
        for dest in Destination::ALL {
            assert!(icons.destination(dest).is_ascii());
        }
        assert!(icons.radio_on().is_ascii());
        assert!(icons.external_link().is_ascii());
    }
}
