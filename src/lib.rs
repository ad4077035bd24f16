//! pomodoro - A terminal Pomodoro timer
//!
//! Alternates work sessions with short and long breaks in a full-screen
//! terminal view, and keeps a per-day count of completed work sessions in
//! `~/.pomodoro/stats.json`.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod stats;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomodoroError;
pub use timer::{SessionController, SessionKind};
