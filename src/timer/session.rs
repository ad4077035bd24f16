//! Session kinds and their durations.

use serde::{Deserialize, Serialize};

use crate::config::TimerConfig;

/// Kind of Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Focused work (25 minutes)
    Work,
    /// Short break (5 minutes)
    ShortBreak,
    /// Long break (15 minutes)
    LongBreak,
}

impl SessionKind {
    /// Canonical duration of this kind in seconds.
    #[must_use]
    pub const fn canonical_seconds(&self) -> u32 {
        match self {
            Self::Work => 1500,
            Self::ShortBreak => 300,
            Self::LongBreak => 900,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Message announcing that this session is up next.
    #[must_use]
    pub const fn announcement(&self) -> &'static str {
        match self {
            Self::Work => "Time's up! Time for work!",
            Self::ShortBreak => "Time's up! Time for a short break!",
            Self::LongBreak => "Time's up! Time for a long break!",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Session lengths and the long-break cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDurations {
    work_seconds: u32,
    short_break_seconds: u32,
    long_break_seconds: u32,
    sessions_until_long_break: u32,
}

impl SessionDurations {
    /// Build durations from explicit second counts.
    ///
    /// A cadence of zero is treated as one (every break is long).
    #[must_use]
    pub fn new(
        work_seconds: u32,
        short_break_seconds: u32,
        long_break_seconds: u32,
        sessions_until_long_break: u32,
    ) -> Self {
        Self {
            work_seconds,
            short_break_seconds,
            long_break_seconds,
            sessions_until_long_break: sessions_until_long_break.max(1),
        }
    }

    /// Build durations from the timer section of the config file.
    #[must_use]
    pub fn from_config(config: &TimerConfig) -> Self {
        Self::new(
            config.work_minutes.saturating_mul(60),
            config.short_break_minutes.saturating_mul(60),
            config.long_break_minutes.saturating_mul(60),
            config.sessions_until_long_break,
        )
    }

    /// Full length of a session of the given kind, in seconds.
    #[must_use]
    pub fn seconds(&self, kind: SessionKind) -> f64 {
        let secs = match kind {
            SessionKind::Work => self.work_seconds,
            SessionKind::ShortBreak => self.short_break_seconds,
            SessionKind::LongBreak => self.long_break_seconds,
        };
        f64::from(secs)
    }

    /// Number of completed work sessions between long breaks.
    #[must_use]
    pub const fn sessions_until_long_break(&self) -> u32 {
        self.sessions_until_long_break
    }

    /// The break that follows the given number of completed work sessions.
    #[must_use]
    pub const fn break_after(&self, completed: u32) -> SessionKind {
        if completed > 0 && completed % self.sessions_until_long_break == 0 {
            SessionKind::LongBreak
        } else {
            SessionKind::ShortBreak
        }
    }
}

impl Default for SessionDurations {
    fn default() -> Self {
        Self::new(
            SessionKind::Work.canonical_seconds(),
            SessionKind::ShortBreak.canonical_seconds(),
            SessionKind::LongBreak.canonical_seconds(),
            4,
        )
    }
}
