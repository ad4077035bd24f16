//! Application state and the timer loop.

use std::time::Duration;

use crate::alert::Notifier;
use crate::error::PomodoroError;
use crate::stats::StatsSummary;
use crate::timer::{Clock, SessionController, Snapshot};
use crate::tui::event::{self, Action, PromptChoice};
use crate::tui::input::InputSource;

/// Days of history shown in the stats panel.
const STATS_PANEL_DAYS: usize = 7;

/// Whether the loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep looping.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Controller state.
    pub snapshot: Snapshot,
    /// Stats panel contents, present while the panel is shown.
    pub stats: Option<StatsSummary>,
    /// Status message to display.
    pub status: Option<String>,
}

/// Draws frames.
pub trait Renderer {
    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be drawn to.
    fn draw(&mut self, view: &View) -> Result<(), PomodoroError>;
}

/// Application state.
pub struct App<C: Clock, N: Notifier> {
    /// The session state machine.
    pub controller: SessionController<C, N>,
    /// Whether the stats panel is shown.
    pub show_stats: bool,
    /// Status message to display.
    pub status: Option<String>,
}

impl<C: Clock, N: Notifier> App<C, N> {
    /// Create a new app around a controller.
    pub const fn new(controller: SessionController<C, N>) -> Self {
        Self {
            controller,
            show_stats: false,
            status: None,
        }
    }

    /// Start the countdown and loop until the operator quits.
    ///
    /// # Errors
    ///
    /// Returns an error if input, drawing, or saving stats fails.
    pub fn run<I, R>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        poll_interval: Duration,
    ) -> Result<(), PomodoroError>
    where
        I: InputSource,
        R: Renderer,
    {
        self.controller.start();

        while self.step(input, renderer)? == Flow::Continue {
            std::thread::sleep(poll_interval);
        }

        tracing::info!(
            "Quit with {} work sessions completed today",
            self.controller.completed_work_sessions()
        );
        Ok(())
    }

    /// One loop iteration: handle input, advance the clock, draw.
    ///
    /// When the countdown runs out this blocks in the session-end prompt
    /// until the operator picks start or quit.
    ///
    /// # Errors
    ///
    /// Returns an error if input, drawing, or saving stats fails.
    pub fn step<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<Flow, PomodoroError>
    where
        I: InputSource,
        R: Renderer,
    {
        if let Some(action) = input.poll_non_blocking()?.and_then(event::action_for) {
            if self.apply(action) == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }

        if self.controller.is_running() && self.controller.tick()?.ended.is_some() {
            return self.session_end(input, renderer);
        }

        renderer.draw(&self.view())?;
        Ok(Flow::Continue)
    }

    /// Apply a timer-screen action.
    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::TogglePause => {
                let running = self.controller.toggle_pause();
                self.status = (!running).then(|| "Paused - press p to resume".to_string());
            }
            Action::Reset => {
                self.controller.reset();
                self.status = Some(format!("{} session reset", self.controller.current_session()));
            }
            Action::ToggleStats => self.show_stats = !self.show_stats,
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn session_end<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<Flow, PomodoroError>
    where
        I: InputSource,
        R: Renderer,
    {
        loop {
            self.status = Some(self.controller.current_session().announcement().to_string());
            renderer.draw(&self.view())?;

            let key = input.read_blocking()?;
            match event::prompt_choice(key) {
                Some(PromptChoice::Start) => {
                    self.controller.start_next();
                    self.status = None;
                    renderer.draw(&self.view())?;
                    return Ok(Flow::Continue);
                }
                Some(PromptChoice::Skip) => {
                    self.controller.skip()?;
                }
                Some(PromptChoice::Quit) => return Ok(Flow::Quit),
                None => tracing::trace!("Ignoring {key:?} at session-end prompt"),
            }
        }
    }

    /// Build the view for the current state.
    #[must_use]
    pub fn view(&self) -> View {
        let stats = self.show_stats.then(|| {
            StatsSummary::calculate(
                self.controller.daily_stats(),
                self.controller.today(),
                STATS_PANEL_DAYS,
            )
        });

        View {
            snapshot: self.controller.snapshot(),
            stats,
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::MockNotifier;
    use crate::stats::StatsStore;
    use crate::timer::{ManualClock, SessionDurations, SessionKind};
    use crate::tui::input::{Key, ScriptedInput};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    type TestApp = App<ManualClock, MockNotifier>;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<View>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, view: &View) -> Result<(), PomodoroError> {
            self.frames.push(view.clone());
            Ok(())
        }
    }

    fn setup() -> (TestApp, ManualClock, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().returning(|_| ());

        let controller = SessionController::new(
            SessionDurations::default(),
            StatsStore::open(temp_dir.path().join("stats.json")),
            clock.clone(),
            notifier,
        );
        let mut app = App::new(controller);
        app.controller.start();
        (app, clock, temp_dir)
    }

    #[test]
    fn test_step_ticks_and_draws() {
        let (mut app, clock, _dir) = setup();
        let mut input = ScriptedInput::default();
        let mut renderer = RecordingRenderer::default();

        clock.advance_secs(60);
        assert_eq!(app.step(&mut input, &mut renderer).unwrap(), Flow::Continue);

        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(renderer.frames[0].snapshot.format_remaining(), "24:00");
    }

    #[test]
    fn test_quit_key_leaves_loop() {
        let (mut app, _clock, _dir) = setup();
        let mut input = ScriptedInput::default().poll(Some(Key::Char('q')));
        let mut renderer = RecordingRenderer::default();

        assert_eq!(app.step(&mut input, &mut renderer).unwrap(), Flow::Quit);
        assert!(renderer.frames.is_empty());
    }

    #[test]
    fn test_pause_key_freezes_display() {
        let (mut app, clock, _dir) = setup();
        let mut input = ScriptedInput::default()
            .poll(Some(Key::Char('p')))
            .poll(None)
            .poll(Some(Key::Char('p')));
        let mut renderer = RecordingRenderer::default();

        app.step(&mut input, &mut renderer).unwrap();
        assert!(!app.controller.is_running());
        assert!(app.status.is_some());

        clock.advance_secs(300);
        app.step(&mut input, &mut renderer).unwrap();
        assert_eq!(app.controller.time_remaining(), 1500.0);

        app.step(&mut input, &mut renderer).unwrap();
        assert!(app.controller.is_running());
        assert_eq!(app.controller.time_remaining(), 1500.0);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_reset_and_stats_toggle() {
        let (mut app, clock, _dir) = setup();
        let mut input = ScriptedInput::default()
            .poll(None)
            .poll(Some(Key::Char('r')))
            .poll(Some(Key::Char('s')));
        let mut renderer = RecordingRenderer::default();

        clock.advance_secs(200);
        app.step(&mut input, &mut renderer).unwrap();
        app.step(&mut input, &mut renderer).unwrap();
        assert_eq!(app.controller.time_remaining(), 1500.0);
        assert!(renderer.frames[1].stats.is_none());

        app.step(&mut input, &mut renderer).unwrap();
        assert!(app.show_stats);
        let stats = renderer.frames[2].stats.as_ref().unwrap();
        assert_eq!(stats.recent.len(), STATS_PANEL_DAYS);
    }

    #[test]
    fn test_session_end_start_next() {
        let (mut app, clock, _dir) = setup();
        let mut input = ScriptedInput::default()
            .poll(None)
            .answer(Key::Char('x'))
            .answer(Key::Enter);
        let mut renderer = RecordingRenderer::default();

        clock.advance_secs(1500);
        assert_eq!(app.step(&mut input, &mut renderer).unwrap(), Flow::Continue);

        assert!(input.is_exhausted());
        assert_eq!(app.controller.current_session(), SessionKind::ShortBreak);
        assert!(app.controller.is_running());
        assert!(!app.controller.is_awaiting_next());
        assert_eq!(app.controller.completed_work_sessions(), 1);

        // The prompt was drawn while waiting, once per key read.
        assert!(renderer.frames[0].snapshot.awaiting_next);
        assert!(renderer.frames[1].snapshot.awaiting_next);
        assert!(!renderer.frames.last().unwrap().snapshot.awaiting_next);
    }

    #[test]
    fn test_session_end_skip_then_quit() {
        let (mut app, clock, dir) = setup();
        let mut input = ScriptedInput::default()
            .poll(None)
            .answer(Key::Char('s'))
            .answer(Key::Char('q'));
        let mut renderer = RecordingRenderer::default();

        clock.advance_secs(1500);
        assert_eq!(app.step(&mut input, &mut renderer).unwrap(), Flow::Quit);

        assert_eq!(app.controller.current_session(), SessionKind::Work);
        assert!(!app.controller.is_running());

        // Stats were written at the switch, before the operator quit.
        let contents = std::fs::read_to_string(dir.path().join("stats.json")).unwrap();
        let stats: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(stats, serde_json::json!({"2024-01-01": 1}));
    }

    #[test]
    fn test_four_cycles_through_the_loop() {
        let (mut app, clock, _dir) = setup();
        let mut input = ScriptedInput::default();
        for _ in 0..3 {
            input = input.poll(None).answer(Key::Char('s')).answer(Key::Enter);
        }
        input = input.poll(None).answer(Key::Enter);
        let mut renderer = RecordingRenderer::default();

        for _ in 0..4 {
            clock.advance_secs(1500);
            assert_eq!(app.step(&mut input, &mut renderer).unwrap(), Flow::Continue);
        }

        assert!(input.is_exhausted());
        assert_eq!(app.controller.current_session(), SessionKind::LongBreak);
        assert_eq!(app.controller.completed_work_sessions(), 4);
    }
}
