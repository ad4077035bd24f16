//! Terminal visualization for daily stats.

use chrono::NaiveDate;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a sparkline (compact inline chart).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_sparkline(values: &[u32]) -> String {
    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let normalized = (f64::from(v) / f64::from(max_value) * 7.0) as usize;
                BAR_CHARS[normalized.clamp(1, 7)]
            }
        })
        .collect()
}

/// Render one bar per day, labelled with the date.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_daily_bars(days: &[(NaiveDate, u32)], bar_width: usize) -> String {
    let max_value = days.iter().map(|&(_, v)| v).max().unwrap_or(1).max(1);

    days.iter()
        .map(|&(date, value)| {
            let bar_length =
                (f64::from(value) / f64::from(max_value) * bar_width as f64) as usize;
            let bar = FULL_BLOCK.to_string().repeat(bar_length);
            let padding = " ".repeat(bar_width.saturating_sub(bar_length));
            format!("{} {} |{bar}{padding} {value}", date.format("%Y-%m-%d"), date.format("%a"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
