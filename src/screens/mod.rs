//! Screen controllers, one per destination.
//!
//! Each controller implements [`Screen`]: it owns its form state, renders
//! itself and turns input into a [`ScreenAction`] for the app to carry out.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │   key / mouse event                          │
//! │        │                                     │
//! │        ▼                                     │
//! │   ScreenState::as_screen_mut()               │
//! │        │ handle_event(event, ctx)            │
//! │        ▼                                     │
//! │   ScreenAction ──► Tracker / UriOpener /     │
//! │                    PanicResponder / toasts   │
//! └──────────────────────────────────────────────┘
//! ```

pub mod dashboard;
pub mod journal;
pub mod limits;
pub mod panic_button;
pub mod screen_trait;
pub mod support;

pub use dashboard::DashboardScreen;
pub use journal::JournalScreen;
pub use limits::LimitsScreen;
pub use panic_button::PanicButtonScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use support::SupportScreen;
