//! The registry of navigable destinations.
//!
//! The set is closed: every destination is a variant of [`Destination`], and
//! [`Destination::ALL`] fixes the order in which they appear in the bottom
//! navigation bar.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One navigable screen identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    #[default]
    Dashboard,
    Limits,
    Journal,
    PanicButton,
    Support,
}

/// Returned when a route string does not name any registered destination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route: {0:?}")]
pub struct UnknownRoute(pub String);

impl Destination {
    /// All destinations in navigation bar order.
    pub const ALL: [Destination; 5] = [
        Destination::Dashboard,
        Destination::Limits,
        Destination::Journal,
        Destination::PanicButton,
        Destination::Support,
    ];

    /// Stable route identifier used as the lookup key.
    pub fn route(&self) -> &'static str {
        match self {
            Destination::Dashboard => "dashboard",
            Destination::Limits => "limits",
            Destination::Journal => "journal",
            Destination::PanicButton => "panicButton",
            Destination::Support => "support",
        }
    }

    /// Label shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::Limits => "Limites",
            Destination::Journal => "Diário",
            Destination::PanicButton => "Pânico",
            Destination::Support => "Suporte",
        }
    }

    /// Look up a destination by its route. Matching is exact.
    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.route() == route)
    }

    /// Position in [`Destination::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Destination::Dashboard => 0,
            Destination::Limits => 1,
            Destination::Journal => 2,
            Destination::PanicButton => 3,
            Destination::Support => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The destination after this one, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The destination before this one, wrapping around.
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Destination {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_route(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_routes_are_unique() {
        let routes: HashSet<&str> = Destination::ALL.iter().map(|d| d.route()).collect();
        assert_eq!(routes.len(), Destination::ALL.len());
    }

    #[test]
    fn test_registry_order() {
        let titles: Vec<&str> = Destination::ALL.iter().map(|d| d.title()).collect();
        assert_eq!(
            titles,
            vec!["Dashboard", "Limites", "Diário", "Pânico", "Suporte"]
        );
    }

    #[test]
    fn test_from_route_round_trips_every_destination() {
        for dest in Destination::ALL {
            assert_eq!(Destination::from_route(dest.route()), Some(dest));
        }
    }

    #[test]
    fn test_from_route_is_case_sensitive() {
        assert_eq!(
            Destination::from_route("panicButton"),
            Some(Destination::PanicButton)
        );
        assert_eq!(Destination::from_route("panicbutton"), None);
        assert_eq!(Destination::from_route(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "unknown".parse::<Destination>().unwrap_err();
        assert_eq!(err, UnknownRoute("unknown".to_string()));
        assert_eq!(err.to_string(), "unknown route: \"unknown\"");
    }

    #[test]
    fn test_index_matches_registry_position() {
        for (i, dest) in Destination::ALL.iter().enumerate() {
            assert_eq!(dest.index(), i);
            assert_eq!(Destination::from_index(i), Some(*dest));
        }
        assert_eq!(Destination::from_index(5), None);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Destination::Support.next(), Destination::Dashboard);
        assert_eq!(Destination::Dashboard.previous(), Destination::Support);
        assert_eq!(Destination::Limits.next(), Destination::Journal);
        assert_eq!(Destination::Journal.previous(), Destination::Limits);
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(Destination::default(), Destination::Dashboard);
    }
}
