//! The mounted screen.
//!
//! One enum holds the controller of the current destination, so exactly one
//! screen's form state exists at a time. Replacing the value unmounts the
//! old screen and drops its state.

use super::Destination;
use crate::screens::{
    DashboardScreen, JournalScreen, LimitsScreen, PanicButtonScreen, Screen, SupportScreen,
};

#[derive(Debug)]
pub enum ScreenState {
    Dashboard(DashboardScreen),
    Limits(LimitsScreen),
    Journal(JournalScreen),
    PanicButton(PanicButtonScreen),
    Support(SupportScreen),
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Dashboard(DashboardScreen::default())
    }
}

impl ScreenState {
    /// A freshly mounted screen for the destination.
    pub fn for_destination(dest: Destination) -> Self {
        match dest {
            Destination::Dashboard => Self::Dashboard(DashboardScreen::new()),
            Destination::Limits => Self::Limits(LimitsScreen::new()),
            Destination::Journal => Self::Journal(JournalScreen::new()),
            Destination::PanicButton => Self::PanicButton(PanicButtonScreen::new()),
            Destination::Support => Self::Support(SupportScreen::new()),
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            Self::Dashboard(_) => Destination::Dashboard,
            Self::Limits(_) => Destination::Limits,
            Self::Journal(_) => Destination::Journal,
            Self::PanicButton(_) => Destination::PanicButton,
            Self::Support(_) => Destination::Support,
        }
    }

    pub fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Dashboard(s) => s,
            Self::Limits(s) => s,
            Self::Journal(s) => s,
            Self::PanicButton(s) => s,
            Self::Support(s) => s,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Dashboard(s) => s,
            Self::Limits(s) => s,
            Self::Journal(s) => s,
            Self::PanicButton(s) => s,
            Self::Support(s) => s,
        }
    }

    pub fn as_dashboard_mut(&mut self) -> Option<&mut DashboardScreen> {
        if let Self::Dashboard(screen) = self {
            Some(screen)
        } else {
            None
        }
    }

    pub fn as_limits(&self) -> Option<&LimitsScreen> {
        if let Self::Limits(screen) = self {
            Some(screen)
        } else {
            None
        }
    }

    pub fn as_journal(&self) -> Option<&JournalScreen> {
        if let Self::Journal(screen) = self {
            Some(screen)
        } else {
            None
        }
    }

    /// Check if a text field is being edited on the current screen.
    pub fn is_input_focused(&self) -> bool {
        self.as_screen().is_input_focused()
    }
}
