//! Formatting helpers for countdown display.

/// Format a number of seconds as MM:SS.
///
/// Fractional seconds are rounded up so the display reads `00:01` until the
/// countdown actually reaches zero. Negative values clamp to `00:00`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_mmss(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0).ceil() as u64;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
