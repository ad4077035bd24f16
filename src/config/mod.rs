//! Configuration management.
//!
//! This module handles loading configuration from `~/.pomodoro/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, LoggingConfig, NotificationConfig, TimerConfig};
