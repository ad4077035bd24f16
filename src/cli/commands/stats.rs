//! Statistics command implementation.
//!
//! Reports completed work sessions per day from the stats file.

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PomodoroError;
use crate::output::to_json;
use crate::stats::{render_daily_bars, render_sparkline, DailyStats, StatsStore, StatsSummary};
use crate::timer::{Clock, SystemClock};

/// Width of the longest bar in the daily chart.
const BAR_WIDTH: usize = 30;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn stats(paths: &Paths, days: usize, format: OutputFormat) -> Result<String, PomodoroError> {
    let stats = StatsStore::load(&paths.stats_file);
    render_stats(&stats, SystemClock.today(), days, format)
}

/// Render a stats report for `days` days ending on `today`.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn render_stats(
    stats: &DailyStats,
    today: NaiveDate,
    days: usize,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    let summary = StatsSummary::calculate(stats, today, days);

    match format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Pretty => Ok(render_pretty(&summary)),
    }
}

fn render_pretty(summary: &StatsSummary) -> String {
    let mut output = Vec::new();

    output.push("🍅 POMODORO STATS".bold().to_string());
    output.push("─".repeat(50));
    output.push(format!(
        "  Today: {}  All time: {}",
        summary.today_count.to_string().green(),
        summary.total
    ));
    output.push(format!(
        "  Current streak: {} days  Longest: {} days",
        summary.current_streak.to_string().yellow(),
        summary.longest_streak
    ));
    if let Some(best) = summary.best_day {
        output.push(format!(
            "  Best day: {} on {}",
            summary.best_day_count.to_string().cyan(),
            best.format("%Y-%m-%d")
        ));
    }
    output.push(String::new());

    if summary.recent.is_empty() {
        return output.join("\n");
    }

    output.push(format!("📈 LAST {} DAYS", summary.recent.len()).bold().to_string());
    output.push("─".repeat(50));
    output.push(format!("  {}", render_sparkline(&summary.recent_counts())));
    output.push(String::new());
    for line in render_daily_bars(&summary.recent, BAR_WIDTH).lines() {
        output.push(format!("  {line}"));
    }

    output.join("\n")
}
