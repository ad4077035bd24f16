//! Key bindings for the timer screen and the session-end prompt.

use crate::tui::input::Key;

/// Action to take for a key pressed while the timer screen is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pause if running, resume if paused.
    TogglePause,
    /// Restart the current session's countdown.
    Reset,
    /// Show or hide the stats panel.
    ToggleStats,
    /// Leave the timer.
    Quit,
}

/// Operator choice at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    /// Start the upcoming session now.
    Start,
    /// Skip the upcoming session.
    Skip,
    /// Leave the timer.
    Quit,
}

/// Map a key to a timer-screen action.
///
/// Returns `None` for keys with no binding.
#[must_use]
pub fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::Interrupt => Some(Action::Quit),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'p' => Some(Action::TogglePause),
            'r' => Some(Action::Reset),
            's' => Some(Action::ToggleStats),
            'q' => Some(Action::Quit),
            _ => None,
        },
        Key::Enter => None,
    }
}

/// Map a key to a session-end choice.
#[must_use]
pub fn prompt_choice(key: Key) -> Option<PromptChoice> {
    match key {
        Key::Enter => Some(PromptChoice::Start),
        Key::Interrupt => Some(PromptChoice::Quit),
        Key::Char(c) => match c.to_ascii_lowercase() {
            's' => Some(PromptChoice::Skip),
            'q' => Some(PromptChoice::Quit),
            _ => None,
        },
    }
}

/// Key hints for the status bar.
pub const TIMER_HELP: &str = "p:pause/resume | r:reset | s:stats | q:quit";

/// Key hints shown at the session-end prompt.
pub const PROMPT_HELP: &str = "Enter:start next | s:skip | q:quit";
