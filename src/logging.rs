//! File-based logging with tracing.
//!
//! The timer owns the terminal while it runs, so log output goes to a
//! per-day file under the logs directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::PomodoroError;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "POMODORO_LOG";

/// Path of the log file for the given day.
#[must_use]
pub fn log_file_path(logs_dir: &Path, date: NaiveDate) -> PathBuf {
    logs_dir.join(format!("pomodoro-{}.log", date.format("%Y-%m-%d")))
}

/// Build the log filter from `POMODORO_LOG`, falling back to `default_level`.
#[must_use]
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize file logging.
///
/// Returns the path of the log file being written.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_file_logging(
    logs_dir: &Path,
    today: NaiveDate,
    default_level: &str,
) -> Result<PathBuf, PomodoroError> {
    fs::create_dir_all(logs_dir).map_err(|e| {
        PomodoroError::Config(format!(
            "Failed to create logs directory {}: {e}",
            logs_dir.display()
        ))
    })?;

    let log_path = log_file_path(logs_dir, today);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            PomodoroError::Config(format!("Failed to open log file {}: {e}", log_path.display()))
        })?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(file_layer)
        .try_init()
        .map_err(|e| PomodoroError::Config(format!("Failed to initialize logging: {e}")))?;

    Ok(log_path)
}
