//! Values exchanged between the screens and the collaborators.

use crate::utils::format::{format_brl, format_play_duration};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A currency amount in Brazilian reais, stored in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn from_reais(reais: i64) -> Self {
        Self {
            cents: reais.saturating_mul(100),
        }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_brl(self.cents))
    }
}

/// How the user is feeling when writing a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
}

impl Mood {
    /// Moods in the order they are offered on the journal screen.
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Sad, Mood::Anxious];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Feliz",
            Mood::Sad => "Triste",
            Mood::Anxious => "Ansioso",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Limits the user wants to respect. `None` means the field was left blank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Limits {
    /// Play time limit in minutes.
    pub time_limit_minutes: Option<u32>,
    /// Spending limit in whole reais.
    pub spending_limit: Option<Money>,
}

/// One journal entry as submitted from the journal screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub mood: Mood,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl JournalEntry {
    pub fn new(mood: Mood, text: impl Into<String>) -> Self {
        Self {
            mood,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

/// The three figures shown on the dashboard.
///
/// A `None` means the tracker could not provide that figure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardMetrics {
    pub days_without_playing: Option<u32>,
    pub weekly_play_time: Option<Duration>,
    pub monthly_losses: Option<Money>,
}

impl DashboardMetrics {
    pub const UNAVAILABLE: &'static str = "--";

    pub fn days_display(&self) -> String {
        self.days_without_playing
            .map(|d| d.to_string())
            .unwrap_or_else(|| Self::UNAVAILABLE.to_string())
    }

    pub fn play_time_display(&self) -> String {
        self.weekly_play_time
            .map(format_play_duration)
            .unwrap_or_else(|| Self::UNAVAILABLE.to_string())
    }

    pub fn losses_display(&self) -> String {
        self.monthly_losses
            .map(|m| m.to_string())
            .unwrap_or_else(|| Self::UNAVAILABLE.to_string())
    }
}
