//! Keyboard input.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomodoroError;

/// A keypress the timer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The Enter key.
    Enter,
    /// Ctrl+C (raw mode swallows SIGINT).
    Interrupt,
}

/// Source of keypresses.
pub trait InputSource {
    /// Return a pending keypress, or `None` immediately if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn poll_non_blocking(&mut self) -> Result<Option<Key>, PomodoroError>;

    /// Wait for the next keypress.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn read_blocking(&mut self) -> Result<Key, PomodoroError>;
}

/// Keypresses read from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    fn read_event() -> Result<Event, PomodoroError> {
        event::read().map_err(|e| PomodoroError::Terminal(format!("Event read failed: {e}")))
    }
}

impl InputSource for TerminalInput {
    fn poll_non_blocking(&mut self) -> Result<Option<Key>, PomodoroError> {
        // Drain non-key events (resize, focus, release) without waiting.
        while event::poll(Duration::ZERO)
            .map_err(|e| PomodoroError::Terminal(format!("Event poll failed: {e}")))?
        {
            if let Some(key) = translate(&Self::read_event()?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn read_blocking(&mut self) -> Result<Key, PomodoroError> {
        loop {
            if let Some(key) = translate(&Self::read_event()?) {
                return Ok(key);
            }
        }
    }
}

/// Map a terminal event to a [`Key`], dropping everything else.
fn translate(event: &Event) -> Option<Key> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };

    if *kind != KeyEventKind::Press {
        return None;
    }

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
        KeyCode::Char(c) => Some(Key::Char(*c)),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}

/// Replays a fixed list of keys.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    polled: std::collections::VecDeque<Option<Key>>,
    blocking: std::collections::VecDeque<Key>,
}

#[cfg(test)]
impl ScriptedInput {
    /// Queue the result of the next non-blocking poll.
    pub fn poll(mut self, key: Option<Key>) -> Self {
        self.polled.push_back(key);
        self
    }

    /// Queue a key for the session-end prompt.
    pub fn answer(mut self, key: Key) -> Self {
        self.blocking.push_back(key);
        self
    }

    /// Check if every queued key was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.polled.is_empty() && self.blocking.is_empty()
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn poll_non_blocking(&mut self) -> Result<Option<Key>, PomodoroError> {
        Ok(self.polled.pop_front().flatten())
    }

    fn read_blocking(&mut self) -> Result<Key, PomodoroError> {
        self.blocking
            .pop_front()
            .ok_or_else(|| PomodoroError::Terminal("scripted input exhausted".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_translate_keys() {
        assert_eq!(
            translate(&press(KeyCode::Char('p'), KeyModifiers::NONE)),
            Some(Key::Char('p'))
        );
        assert_eq!(
            translate(&press(KeyCode::Char('P'), KeyModifiers::SHIFT)),
            Some(Key::Char('P'))
        );
        assert_eq!(
            translate(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::Enter)
        );
        assert_eq!(
            translate(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
    }

    #[test]
    fn test_translate_ignores_other_events() {
        assert_eq!(translate(&press(KeyCode::Up, KeyModifiers::NONE)), None);
        assert_eq!(translate(&Event::Resize(80, 24)), None);

        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(release)), None);
    }

    #[test]
    fn test_scripted_input() {
        let mut input = ScriptedInput::default()
            .poll(None)
            .poll(Some(Key::Char('p')))
            .answer(Key::Enter);

        assert_eq!(input.poll_non_blocking().unwrap(), None);
        assert_eq!(input.poll_non_blocking().unwrap(), Some(Key::Char('p')));
        assert_eq!(input.poll_non_blocking().unwrap(), None);
        assert_eq!(input.read_blocking().unwrap(), Key::Enter);
        assert!(input.read_blocking().is_err());
        assert!(input.is_exhausted());
    }
}
