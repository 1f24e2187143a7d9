//! Navigation controller.
//!
//! Holds the single "current destination" value for the shell. The app owns
//! one controller and passes it explicitly to whatever needs to read or
//! change it; there is no global navigation state.

use super::destination::Destination;
use tracing::{debug, info};

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The current destination changed.
    Changed { from: Destination, to: Destination },
    /// The request named the destination that was already current.
    Unchanged,
    /// The route did not match any destination; nothing happened.
    UnknownRoute,
}

impl NavigationOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, NavigationOutcome::Changed { .. })
    }
}

/// Owns which destination is currently displayed.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    current: Destination,
}

impl NavigationController {
    /// Create a controller positioned on the dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_destination(&self) -> Destination {
        self.current
    }

    /// Navigate to the destination registered under `route`.
    ///
    /// Unknown routes are ignored and leave the current destination as is.
    pub fn navigate_to(&mut self, route: &str) -> NavigationOutcome {
        match Destination::from_route(route) {
            Some(dest) => self.navigate(dest),
            None => {
                debug!("Ignoring navigation to unknown route {:?}", route);
                NavigationOutcome::UnknownRoute
            }
        }
    }

    /// Navigate to a known destination.
    pub fn navigate(&mut self, dest: Destination) -> NavigationOutcome {
        if dest == self.current {
            return NavigationOutcome::Unchanged;
        }
        let from = self.current;
        self.current = dest;
        info!("Navigated from {} to {}", from.route(), dest.route());
        NavigationOutcome::Changed { from, to: dest }
    }

    /// Move to the next destination in bar order, wrapping at the end.
    pub fn next(&mut self) -> NavigationOutcome {
        self.navigate(self.current.next())
    }

    /// Move to the previous destination in bar order, wrapping at the start.
    pub fn previous(&mut self) -> NavigationOutcome {
        self.navigate(self.current.previous())
    }
}
