//! Configuration settings.
//!
//! Settings are loaded from `~/.pomodoro/config.yaml`. Every field is
//! optional; missing fields fall back to the classic Pomodoro values.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PomodoroError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Session timing settings.
    pub timer: TimerConfig,
    /// Session-change alert settings.
    pub notifications: NotificationConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

/// Session timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session duration in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of completed work sessions before a long break.
    #[serde(default = "default_sessions_until_long_break")]
    pub sessions_until_long_break: u32,
    /// Input poll and redraw interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// Session-change alert settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Ring the terminal bell.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Show a desktop notification.
    #[serde(default = "default_true")]
    pub desktop: bool,
    /// Command used to speak the announcement, e.g. `say` or `espeak`.
    #[serde(default)]
    pub speech_command: Option<String>,
}

/// Log file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter directive, overridden by `POMODORO_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_sessions_until_long_break() -> u32 {
    4
}

const fn default_poll_interval_ms() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            sessions_until_long_break: default_sessions_until_long_break(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl TimerConfig {
    /// Poll interval as a duration, never shorter than 10ms.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(10))
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            bell: default_true(),
            desktop: default_true(),
            speech_command: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, PomodoroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
