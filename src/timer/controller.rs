//! The session state machine.
//!
//! [`SessionController`] owns the countdown for the current session and moves
//! between work and break sessions when it runs out. Elapsed time is always
//! the real delta between ticks as reported by the [`Clock`], never the loop's
//! poll interval, so jitter and system sleep do not skew the countdown.
//!
//! Every switch pauses the clock and leaves the controller awaiting the
//! operator's choice: start the next session, skip it, or quit.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use serde::Serialize;

use super::clock::Clock;
use super::format::format_mmss;
use super::session::{SessionDurations, SessionKind};
use crate::alert::Notifier;
use crate::error::PomodoroError;
use crate::stats::{DailyStats, StatsStore};

/// Result of one clock update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Wall-clock time charged against the countdown.
    pub elapsed: Duration,
    /// The session switched to, if the countdown ran out.
    pub ended: Option<SessionKind>,
}

impl Tick {
    const IDLE: Self = Self {
        elapsed: Duration::ZERO,
        ended: None,
    };
}

/// Read-only view of the controller for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Current session kind
    pub session: SessionKind,
    /// Seconds left in the current session
    pub time_remaining: f64,
    /// Full length of the current session in seconds
    pub session_length: f64,
    /// Whether the countdown is advancing
    pub running: bool,
    /// Whether the session-end prompt is pending
    pub awaiting_next: bool,
    /// Work sessions completed today, including this run
    pub completed_work_sessions: u32,
}

impl Snapshot {
    /// Fraction of the session elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.session_length <= 0.0 {
            return 1.0;
        }
        (1.0 - self.time_remaining / self.session_length).clamp(0.0, 1.0)
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.time_remaining)
    }
}

/// Drives the work / short break / long break cycle.
pub struct SessionController<C: Clock, N: Notifier> {
    durations: SessionDurations,
    current_session: SessionKind,
    time_remaining: f64,
    running: bool,
    awaiting_next: bool,
    completed_work_sessions: u32,
    last_tick: Instant,
    store: StatsStore,
    clock: C,
    notifier: N,
}

impl<C: Clock, N: Notifier> SessionController<C, N> {
    /// Create a paused controller at the start of a work session.
    ///
    /// The completed count is seeded from today's entry in `store`.
    pub fn new(durations: SessionDurations, store: StatsStore, clock: C, notifier: N) -> Self {
        let completed_work_sessions = store.stats().count_for(clock.today());
        let last_tick = clock.now();

        tracing::debug!("Seeded controller with {completed_work_sessions} completed sessions");

        Self {
            durations,
            current_session: SessionKind::Work,
            time_remaining: durations.seconds(SessionKind::Work),
            running: false,
            awaiting_next: false,
            completed_work_sessions,
            last_tick,
            store,
            clock,
            notifier,
        }
    }

    /// Start the countdown.
    pub fn start(&mut self) {
        self.running = true;
        self.last_tick = self.clock.now();
        tracing::info!("Started {} session", self.current_session);
    }

    /// Pause the countdown. Does nothing if already paused.
    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!("Paused with {:.1}s remaining", self.time_remaining);
        }
    }

    /// Resume the countdown without charging the paused interval.
    pub fn resume(&mut self) {
        self.running = true;
        self.last_tick = self.clock.now();
        tracing::debug!("Resumed with {:.1}s remaining", self.time_remaining);
    }

    /// Pause if running, resume otherwise. Returns whether the clock now runs.
    pub fn toggle_pause(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.resume();
        }
        self.running
    }

    /// Restore the full duration of the current session.
    pub fn reset(&mut self) {
        self.time_remaining = self.durations.seconds(self.current_session);
        tracing::debug!("Reset {} session", self.current_session);
    }

    /// Charge the wall-clock time since the last tick against the countdown.
    ///
    /// Switches sessions when the countdown reaches zero. The switch pauses
    /// the clock, so at most one boundary is crossed per tick no matter how
    /// large the elapsed delta is.
    ///
    /// # Errors
    ///
    /// Returns an error if recording a completed work session fails.
    pub fn tick(&mut self) -> Result<Tick, PomodoroError> {
        if !self.running {
            return Ok(Tick::IDLE);
        }

        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.time_remaining -= elapsed.as_secs_f64();

        let ended = if self.time_remaining <= 0.0 {
            Some(self.switch_session()?)
        } else {
            None
        };

        Ok(Tick { elapsed, ended })
    }

    /// End the current session and move to the next one.
    ///
    /// Leaving a work session credits a completion and persists it before
    /// anything else happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the stats file cannot be written.
    pub fn switch_session(&mut self) -> Result<SessionKind, PomodoroError> {
        self.advance(true)
    }

    /// Skip the upcoming session without running its clock.
    ///
    /// A skipped work session is not credited, and the break after it is
    /// always a short one. The long-break cadence is not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the stats file cannot be written.
    pub fn skip(&mut self) -> Result<SessionKind, PomodoroError> {
        tracing::info!("Skipping {} session", self.current_session);
        self.advance(false)
    }

    /// Begin the session chosen at the session-end prompt.
    pub fn start_next(&mut self) {
        self.time_remaining = self.durations.seconds(self.current_session);
        self.awaiting_next = false;
        self.start();
    }

    fn advance(&mut self, credit_work: bool) -> Result<SessionKind, PomodoroError> {
        let next = match self.current_session {
            SessionKind::Work if credit_work => {
                self.completed_work_sessions += 1;
                self.store.record_completion(self.clock.today())?;
                self.durations.break_after(self.completed_work_sessions)
            }
            SessionKind::Work => SessionKind::ShortBreak,
            SessionKind::ShortBreak | SessionKind::LongBreak => SessionKind::Work,
        };

        tracing::info!(
            "Switching from {} to {next} ({} completed)",
            self.current_session,
            self.completed_work_sessions
        );

        self.current_session = next;
        self.time_remaining = self.durations.seconds(next);
        self.running = false;
        self.awaiting_next = true;
        self.notifier.notify(next);

        Ok(next)
    }

    /// Current session kind.
    #[must_use]
    pub const fn current_session(&self) -> SessionKind {
        self.current_session
    }

    /// Seconds left in the current session.
    #[must_use]
    pub const fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    /// Check if the countdown is advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Check if the session-end prompt is pending.
    #[must_use]
    pub const fn is_awaiting_next(&self) -> bool {
        self.awaiting_next
    }

    /// Work sessions completed today, including this run.
    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    /// Persisted daily stats, including completions from this run.
    #[must_use]
    pub const fn daily_stats(&self) -> &DailyStats {
        self.store.stats()
    }

    /// Today's date according to the controller's clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Capture the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.current_session,
            time_remaining: self.time_remaining,
            session_length: self.durations.seconds(self.current_session),
            running: self.running,
            awaiting_next: self.awaiting_next,
            completed_work_sessions: self.completed_work_sessions,
        }
    }
}
