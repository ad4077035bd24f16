//! Output formatting helpers for command results.

use serde::Serialize;

use crate::error::PomodoroError;

/// Serialize a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomodoroError> {
    serde_json::to_string_pretty(value).map_err(|e| PomodoroError::Parse(e.to_string()))
}
