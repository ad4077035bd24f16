//! Daily completion statistics.
//!
//! Provides the persisted date-to-count store plus summaries and charts
//! built from it.

pub mod metrics;
pub mod store;
pub mod visualization;

pub use metrics::StatsSummary;
pub use store::{date_key, DailyStats, StatsStore};
pub use visualization::{render_daily_bars, render_sparkline};
