//! Tracking and persistence collaborator.
//!
//! A real implementation would derive the dashboard figures from recorded
//! play sessions and store limits and journal entries. The shell only
//! defines the interface; [`PlaceholderTracker`] returns fixed figures and
//! accepts saves without storing anything.

use super::{ServiceError, ServiceResult};
use crate::models::{DashboardMetrics, JournalEntry, Limits, Money};
use std::time::Duration;
use tracing::{info, warn};

/// Source of tracked figures and sink for user-entered data.
pub trait Tracker {
    fn days_since_last_play(&self) -> ServiceResult<u32>;

    fn weekly_play_duration(&self) -> ServiceResult<Duration>;

    fn monthly_loss_total(&self) -> ServiceResult<Money>;

    fn save_limits(&mut self, limits: &Limits) -> ServiceResult<()>;

    fn save_journal_entry(&mut self, entry: &JournalEntry) -> ServiceResult<()>;

    /// Collect the dashboard figures.
    ///
    /// A figure that fails to load is left empty. The first failure is
    /// returned alongside the metrics so the caller can surface it.
    fn dashboard_metrics(&self) -> (DashboardMetrics, Option<ServiceError>) {
        let mut first_error = None;
        let metrics = DashboardMetrics {
            days_without_playing: keep(
                self.days_since_last_play(),
                "days since last play",
                &mut first_error,
            ),
            weekly_play_time: keep(
                self.weekly_play_duration(),
                "weekly play duration",
                &mut first_error,
            ),
            monthly_losses: keep(
                self.monthly_loss_total(),
                "monthly loss total",
                &mut first_error,
            ),
        };
        (metrics, first_error)
    }
}

fn keep<T>(
    result: ServiceResult<T>,
    what: &str,
    first_error: &mut Option<ServiceError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to load {}: {}", what, e);
            first_error.get_or_insert(e);
            None
        }
    }
}

/// Tracker that reports fixed figures and discards saves.
#[derive(Debug, Clone)]
pub struct PlaceholderTracker {
    days_since_last_play: u32,
    weekly_play_duration: Duration,
    monthly_loss_total: Money,
}

impl Default for PlaceholderTracker {
    fn default() -> Self {
        Self {
            days_since_last_play: 15,
            weekly_play_duration: Duration::from_secs(2 * 3600 + 45 * 60),
            monthly_loss_total: Money::from_reais(520),
        }
    }
}

impl PlaceholderTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tracker for PlaceholderTracker {
    fn days_since_last_play(&self) -> ServiceResult<u32> {
        Ok(self.days_since_last_play)
    }

    fn weekly_play_duration(&self) -> ServiceResult<Duration> {
        Ok(self.weekly_play_duration)
    }

    fn monthly_loss_total(&self) -> ServiceResult<Money> {
        Ok(self.monthly_loss_total)
    }

    fn save_limits(&mut self, limits: &Limits) -> ServiceResult<()> {
        info!(
            time_limit_minutes = ?limits.time_limit_minutes,
            spending_limit_cents = ?limits.spending_limit.map(|m| m.cents()),
            "Limits submitted (not persisted)"
        );
        Ok(())
    }

    fn save_journal_entry(&mut self, entry: &JournalEntry) -> ServiceResult<()> {
        info!(
            mood = ?entry.mood,
            chars = entry.text.chars().count(),
            timestamp = %entry.timestamp.to_rfc3339(),
            "Journal entry submitted (not persisted)"
        );
        Ok(())
    }
}
