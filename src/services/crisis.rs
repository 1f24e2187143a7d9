//! Panic button collaborator.

use super::ServiceResult;
use tracing::warn;

/// Reacts when the user asks for help right now.
pub trait PanicResponder {
    fn on_panic_activated(&mut self) -> ServiceResult<()>;
}

/// Records the activation in the log. It does not contact anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPanicResponder;

impl PanicResponder for LoggingPanicResponder {
    fn on_panic_activated(&mut self) -> ServiceResult<()> {
        warn!("Panic button activated");
        Ok(())
    }
}
