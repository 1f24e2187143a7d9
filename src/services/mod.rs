//! Collaborator seams.
//!
//! The shell does not track play time, store journal entries or intervene
//! in a crisis. It calls out to collaborators for those concerns, and this
//! module defines their interfaces together with the default
//! implementations the binary ships with.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Screens, Components)                     │
//! └─────────────────────┬───────────────────────────┘
//!                       │ ScreenAction
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │                  Services                       │
//! │  ┌─────────┐ ┌────────────┐ ┌────────────────┐  │
//! │  │ Tracker │ │ UriOpener  │ │ PanicResponder │  │
//! │  └─────────┘ └────────────┘ └────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod crisis;
pub mod links;
pub mod tracker;

pub use crisis::{LoggingPanicResponder, PanicResponder};
pub use links::{SupportLink, SystemUriOpener, UriOpener, SUPPORT_LINKS};
pub use tracker::{PlaceholderTracker, Tracker};

use thiserror::Error;

/// Failures reported by collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storing or reading tracked data failed. The user can retry.
    #[error("não foi possível salvar: {0}")]
    Persistence(String),

    /// A tracked figure could not be read. The user can retry.
    #[error("dados indisponíveis: {0}")]
    Unavailable(String),

    /// The host environment could not open an external link.
    #[error("não foi possível abrir {url}")]
    ExternalOpen {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The panic responder could not complete its action.
    #[error("não foi possível acionar a ajuda: {0}")]
    Crisis(String),
}

impl ServiceError {
    /// Whether repeating the same action may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceError::Persistence(_) | ServiceError::Unavailable(_)
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// The set of collaborators handed to the app at mount time.
pub struct Services {
    pub tracker: Box<dyn Tracker>,
    pub uri_opener: Box<dyn UriOpener>,
    pub panic_responder: Box<dyn PanicResponder>,
}

impl Services {
    pub fn new(
        tracker: Box<dyn Tracker>,
        uri_opener: Box<dyn UriOpener>,
        panic_responder: Box<dyn PanicResponder>,
    ) -> Self {
        Self {
            tracker,
            uri_opener,
            panic_responder,
        }
    }
}

impl Default for Services {
    /// Placeholder tracker, system URL opener and logging panic responder.
    fn default() -> Self {
        Self::new(
            Box::new(PlaceholderTracker::new()),
            Box::new(SystemUriOpener),
            Box::new(LoggingPanicResponder),
        )
    }
}
