//! MindfulBet - a terminal companion for people keeping their betting in check
//!
//! The crate provides a five-screen shell (dashboard, limits, mood journal,
//! panic button and support links) with a persistent bottom navigation bar.
//! Persistence and tracking sit behind the traits in [`services`], so the
//! shell runs against placeholder data until a real backend is plugged in.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod icons;
pub mod keymap;
pub mod models;
pub mod screens;
pub mod services;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

pub use app::App;
pub use config::Config;
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
pub use state::{Destination, NavigationController, NavigationOutcome};
