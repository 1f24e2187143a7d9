//! Navigation state.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ NavigationController      ScreenState        │
//! │  current: Destination ──► Dashboard(..)      │
//! │                           Limits(..)         │
//! │                           Journal(..)        │
//! │                           PanicButton(..)    │
//! │                           Support(..)        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The controller decides which destination is current; the screen state
//! holds the mounted controller for it. The app keeps the two in step.

pub mod destination;
pub mod navigation;
pub mod screen;

pub use destination::{Destination, UnknownRoute};
pub use navigation::{NavigationController, NavigationOutcome};
pub use screen::ScreenState;
