//! Terminal User Interface (TUI) for the timer.
//!
//! Runs the single-threaded timer loop: poll the keyboard without blocking,
//! advance the session clock, redraw, sleep. Built with ratatui and crossterm.

mod app;
mod event;
mod input;
mod ui;

pub use app::{App, Flow, Renderer, View};
pub use event::{action_for, prompt_choice, Action, PromptChoice};
pub use input::{InputSource, Key, TerminalInput};
pub use ui::TerminalRenderer;

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::alert::DesktopNotifier;
use crate::config::{Config, Paths};
use crate::error::PomodoroError;
use crate::stats::StatsStore;
use crate::timer::{SessionController, SessionDurations, SystemClock};

/// Run the timer until the operator quits.
///
/// The completed count is seeded from today's entry in the stats file.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize, or if input,
/// drawing, or saving stats fails while running.
pub fn run(config: &Config, paths: &Paths) -> Result<(), PomodoroError> {
    let store = StatsStore::open(&paths.stats_file);
    let controller = SessionController::new(
        SessionDurations::from_config(&config.timer),
        store,
        SystemClock,
        DesktopNotifier::new(config.notifications.clone()),
    );
    let mut app = App::new(controller);

    let mut renderer = TerminalRenderer::new(setup_terminal()?);
    let result = app.run(
        &mut TerminalInput,
        &mut renderer,
        config.timer.poll_interval(),
    );
    restore_terminal(renderer.terminal_mut());

    if let Err(ref e) = result {
        tracing::error!("Timer stopped: {e}");
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, PomodoroError> {
    enable_raw_mode()
        .map_err(|e| PomodoroError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomodoroError::Terminal(format!("Failed to setup terminal: {e}")))?;

    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| PomodoroError::Terminal(format!("Failed to create terminal: {e}")))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}
