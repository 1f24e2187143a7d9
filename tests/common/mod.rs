//! Shared test utilities for shell integration tests.
//!
//! Provides recording collaborators that stand in for the tracker, the URI
//! opener and the panic responder. Each one shares its log through an
//! `Rc<RefCell<..>>` handle, so a test keeps a [`Recorder`] while the app
//! owns the boxed collaborator.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use mindfulbet::config::Config;
use mindfulbet::models::{JournalEntry, Limits, Money};
use mindfulbet::services::{
    PanicResponder, ServiceError, ServiceResult, Services, Tracker, UriOpener,
};
use mindfulbet::App;

/// Everything the collaborators were asked to do.
#[derive(Debug, Default)]
pub struct Calls {
    pub saved_limits: Vec<Limits>,
    pub saved_entries: Vec<JournalEntry>,
    pub opened_uris: Vec<String>,
    pub panic_activations: usize,
    pub metric_loads: usize,
}

/// Failures queued for the next collaborator calls.
#[derive(Debug, Default)]
pub struct Failures {
    pub saves: VecDeque<String>,
    pub opens: usize,
    pub losses: usize,
}

#[derive(Debug, Default)]
struct Shared {
    calls: Calls,
    failures: Failures,
}

/// Test-side handle onto the recording collaborators.
#[derive(Clone, Default)]
pub struct Recorder {
    shared: Rc<RefCell<Shared>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collaborators wired to this recorder.
    pub fn services(&self) -> Services {
        Services::new(
            Box::new(RecordingTracker {
                shared: Rc::clone(&self.shared),
            }),
            Box::new(RecordingUriOpener {
                shared: Rc::clone(&self.shared),
            }),
            Box::new(RecordingPanicResponder {
                shared: Rc::clone(&self.shared),
            }),
        )
    }

    /// An app on the dashboard with default config and these collaborators.
    pub fn app(&self) -> App {
        App::new(Config::default(), self.services())
    }

    pub fn saved_limits(&self) -> Vec<Limits> {
        self.shared.borrow().calls.saved_limits.clone()
    }

    pub fn saved_entries(&self) -> Vec<JournalEntry> {
        self.shared.borrow().calls.saved_entries.clone()
    }

    pub fn opened_uris(&self) -> Vec<String> {
        self.shared.borrow().calls.opened_uris.clone()
    }

    pub fn panic_activations(&self) -> usize {
        self.shared.borrow().calls.panic_activations
    }

    pub fn metric_loads(&self) -> usize {
        self.shared.borrow().calls.metric_loads
    }

    /// Make the next save fail with a persistence error.
    pub fn fail_next_save(&self, reason: &str) {
        self.shared
            .borrow_mut()
            .failures
            .saves
            .push_back(reason.to_string());
    }

    /// Make the next `count` URI opens fail.
    pub fn fail_opens(&self, count: usize) {
        self.shared.borrow_mut().failures.opens = count;
    }

    /// Make the next `count` loss lookups fail.
    pub fn fail_losses(&self, count: usize) {
        self.shared.borrow_mut().failures.losses = count;
    }
}

struct RecordingTracker {
    shared: Rc<RefCell<Shared>>,
}

impl RecordingTracker {
    fn take_save_failure(&self) -> ServiceResult<()> {
        match self.shared.borrow_mut().failures.saves.pop_front() {
            Some(reason) => Err(ServiceError::Persistence(reason)),
            None => Ok(()),
        }
    }
}

impl Tracker for RecordingTracker {
    fn days_since_last_play(&self) -> ServiceResult<u32> {
        self.shared.borrow_mut().calls.metric_loads += 1;
        Ok(15)
    }

    fn weekly_play_duration(&self) -> ServiceResult<Duration> {
        Ok(Duration::from_secs(2 * 3600 + 45 * 60))
    }

    fn monthly_loss_total(&self) -> ServiceResult<Money> {
        let mut shared = self.shared.borrow_mut();
        if shared.failures.losses > 0 {
            shared.failures.losses -= 1;
            return Err(ServiceError::Unavailable("ledger offline".to_string()));
        }
        Ok(Money::from_reais(520))
    }

    fn save_limits(&mut self, limits: &Limits) -> ServiceResult<()> {
        self.take_save_failure()?;
        self.shared
            .borrow_mut()
            .calls
            .saved_limits
            .push(limits.clone());
        Ok(())
    }

    fn save_journal_entry(&mut self, entry: &JournalEntry) -> ServiceResult<()> {
        self.take_save_failure()?;
        self.shared
            .borrow_mut()
            .calls
            .saved_entries
            .push(entry.clone());
        Ok(())
    }
}

struct RecordingUriOpener {
    shared: Rc<RefCell<Shared>>,
}

impl UriOpener for RecordingUriOpener {
    fn open_external_uri(&self, uri: &str) -> ServiceResult<()> {
        let mut shared = self.shared.borrow_mut();
        shared.calls.opened_uris.push(uri.to_string());
        if shared.failures.opens > 0 {
            shared.failures.opens -= 1;
            return Err(ServiceError::ExternalOpen {
                url: uri.to_string(),
                source: io::Error::other("no browser"),
            });
        }
        Ok(())
    }
}

struct RecordingPanicResponder {
    shared: Rc<RefCell<Shared>>,
}

impl PanicResponder for RecordingPanicResponder {
    fn on_panic_activated(&mut self) -> ServiceResult<()> {
        self.shared.borrow_mut().calls.panic_activations += 1;
        Ok(())
    }
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Send one key press to the app.
pub fn press(app: &mut App, code: KeyCode) {
    app.handle_event(key(code)).unwrap();
}

/// Send every character of `text` as a key press.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
