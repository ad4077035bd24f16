//! Metric calculations over daily stats.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::store::DailyStats;

/// Summary of completed work sessions as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// The day the summary was computed for
    pub today: NaiveDate,
    /// Completed today
    pub today_count: u32,
    /// Completed across all recorded days
    pub total: u64,
    /// Consecutive days with at least one completion, ending today or yesterday
    pub current_streak: usize,
    /// Longest run of consecutive days with completions
    pub longest_streak: usize,
    /// Best day date
    pub best_day: Option<NaiveDate>,
    /// Best day count
    pub best_day_count: u32,
    /// Per-day counts for the requested window, oldest first
    pub recent: Vec<(NaiveDate, u32)>,
}

impl StatsSummary {
    /// Calculate a summary covering the last `days` days up to `today`.
    #[must_use]
    pub fn calculate(stats: &DailyStats, today: NaiveDate, days: usize) -> Self {
        let active: Vec<NaiveDate> = stats
            .entries()
            .filter(|&(_, count)| count > 0)
            .map(|(date, _)| date)
            .collect();

        let (best_day, best_day_count) = stats
            .entries()
            .filter(|&(_, count)| count > 0)
            // Ties go to the most recent day.
            .max_by_key(|&(date, count)| (count, date))
            .map_or((None, 0), |(date, count)| (Some(date), count));

        // The window stops at the earliest representable date.
        let mut recent: Vec<(NaiveDate, u32)> = (0..days as u64)
            .map_while(|offset| today.checked_sub_days(Days::new(offset)))
            .map(|day| (day, stats.count_for(day)))
            .collect();
        recent.reverse();

        Self {
            today,
            today_count: stats.count_for(today),
            total: stats.total(),
            current_streak: current_streak(&active, today),
            longest_streak: longest_streak(&active),
            best_day,
            best_day_count,
            recent,
        }
    }

    /// Counts from the recent window, oldest first.
    #[must_use]
    pub fn recent_counts(&self) -> Vec<u32> {
        self.recent.iter().map(|&(_, count)| count).collect()
    }
}

/// Streak ending today, or yesterday if nothing is recorded yet today.
fn current_streak(active: &[NaiveDate], today: NaiveDate) -> usize {
    let mut check_date = if active.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(date) = check_date.filter(|date| active.contains(date)) {
        streak += 1;
        check_date = date.pred_opt();
    }
    streak
}

/// Longest run of consecutive dates. `active` must be sorted ascending.
fn longest_streak(active: &[NaiveDate]) -> usize {
    let mut longest = 0;
    let mut streak = 0;
    let mut prev_date: Option<NaiveDate> = None;

    for &date in active {
        streak = match prev_date {
            Some(prev) if (date - prev).num_days() == 1 => streak + 1,
            _ => 1,
        };
        longest = longest.max(streak);
        prev_date = Some(date);
    }

    longest
}
