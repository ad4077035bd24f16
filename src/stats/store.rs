//! Daily completion stats persisted as a JSON file.
//!
//! The file is a flat object of `YYYY-MM-DD` keys to completed work
//! session counts, e.g. `{"2024-03-01": 6, "2024-03-02": 3}`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PomodoroError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date the way it is keyed in the stats file.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Completed work sessions per calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyStats {
    days: BTreeMap<String, u32>,
}

impl DailyStats {
    /// Create empty stats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse stats from file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents are not a date-to-count object.
    pub fn from_json(contents: &str) -> Result<Self, PomodoroError> {
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(contents).map_err(|e| PomodoroError::Parse(e.to_string()))
    }

    /// Serialize stats as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, PomodoroError> {
        serde_json::to_string_pretty(self).map_err(|e| PomodoroError::Parse(e.to_string()))
    }

    /// Completed sessions on the given date.
    #[must_use]
    pub fn count_for(&self, date: NaiveDate) -> u32 {
        self.days.get(&date_key(date)).copied().unwrap_or(0)
    }

    /// Add one completion to the given date, returning the new count.
    pub fn increment(&mut self, date: NaiveDate) -> u32 {
        let count = self.days.entry(date_key(date)).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Completed sessions across all recorded days.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.days.values().map(|&c| u64::from(c)).sum()
    }

    /// Recorded days in ascending date order.
    ///
    /// Keys that are not valid dates are skipped.
    pub fn entries(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.days.iter().filter_map(|(key, &count)| {
            NaiveDate::parse_from_str(key, DATE_FORMAT)
                .ok()
                .map(|date| (date, count))
        })
    }
}

/// Stats file on disk plus its in-memory copy.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    stats: DailyStats,
}

impl StatsStore {
    /// Open the stats file at `path`.
    ///
    /// A missing or unreadable file yields empty stats.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stats = Self::load(&path);
        Self { path, stats }
    }

    /// Load stats from `path`, treating missing or corrupt files as empty.
    #[must_use]
    pub fn load(path: &Path) -> DailyStats {
        if !path.exists() {
            return DailyStats::new();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Could not read stats file {}: {e}", path.display());
                return DailyStats::new();
            }
        };

        DailyStats::from_json(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt stats file {}: {e}", path.display());
            DailyStats::new()
        })
    }

    /// Write the full stats file.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::Stats`] if the file cannot be written.
    pub fn save(&self) -> Result<(), PomodoroError> {
        let contents = self.stats.to_json()?;
        let fail = |e: std::io::Error| {
            PomodoroError::Stats(format!("{}: {e}", self.path.display()))
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(fail)?;
            }
        }

        // Write then rename so an interrupted save never truncates the file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents).map_err(fail)?;
        std::fs::rename(&tmp, &self.path).map_err(fail)?;

        tracing::debug!("Saved stats to {}", self.path.display());
        Ok(())
    }

    /// Record one completed work session on `date` and persist immediately.
    ///
    /// # Errors
    ///
    /// Returns [`PomodoroError::Stats`] if the file cannot be written.
    pub fn record_completion(&mut self, date: NaiveDate) -> Result<u32, PomodoroError> {
        let count = self.stats.increment(date);
        self.save()?;
        tracing::info!("Recorded work session {count} for {}", date_key(date));
        Ok(count)
    }

    /// In-memory stats.
    #[must_use]
    pub const fn stats(&self) -> &DailyStats {
        &self.stats
    }
}
