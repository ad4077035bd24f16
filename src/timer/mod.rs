//! Pomodoro session timing.
//!
//! Provides the work/break state machine:
//! - Session kinds and their durations
//! - A wall-clock driven countdown controller
//! - Pluggable time sources for simulated runs

pub mod clock;
pub mod controller;
pub mod format;
pub mod session;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::ManualClock;
pub use controller::{SessionController, Snapshot, Tick};
pub use format::format_mmss;
pub use session::{SessionDurations, SessionKind};
