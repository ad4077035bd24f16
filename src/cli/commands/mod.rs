//! Command implementations.
//!
//! Each command returns the text to print, or performs its work directly
//! when it owns the terminal.

mod completions;
mod stats;

pub use completions::completions;
pub use stats::{render_stats, stats};

use crate::config::{Config, Paths};
use crate::error::PomodoroError;
use crate::logging;
use crate::timer::{Clock, SystemClock};
use crate::tui;

/// Banner printed by the version command.
#[must_use]
pub fn version() -> String {
    format!("Pomodoro Timer v{}", env!("CARGO_PKG_VERSION"))
}

/// Run the interactive timer.
///
/// Loads `config.yaml` from the data directory, opens the daily log file,
/// and hands the terminal to the timer until the operator quits.
///
/// # Errors
///
/// Returns an error if the config is invalid, the data directory cannot be
/// created, or the timer stops on a terminal or stats failure.
pub fn start(paths: &Paths) -> Result<String, PomodoroError> {
    let config = Config::load_from_path(&paths.config_file)?;
    paths.ensure_dirs()?;

    match logging::init_file_logging(&paths.logs, SystemClock.today(), &config.logging.level) {
        Ok(log_path) => tracing::info!(
            "pomodoro {} starting, logging to {}",
            env!("CARGO_PKG_VERSION"),
            log_path.display()
        ),
        Err(e) => eprintln!("warning: logging disabled: {e}"),
    }

    tracing::debug!("Timer config: {:?}", config.timer);
    tui::run(&config, paths)?;
    Ok(String::new())
}
