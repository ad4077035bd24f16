use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Longest history window the stats command accepts.
pub const MAX_STATS_DAYS: i64 = 3650;

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A terminal Pomodoro timer with daily completion stats")]
#[command(long_about = "pomodoro - A terminal Pomodoro timer

Alternates 25-minute work sessions with 5-minute short breaks, and takes a
15-minute long break after every fourth completed work session. Completed
work sessions are counted per day in ~/.pomodoro/stats.json.

QUICK START:
  pomodoro start            Start the timer
  pomodoro stats            Show completed sessions per day

TIMER CONTROLS:
  p    Pause / resume
  r    Reset the current session
  s    Show / hide the stats panel
  q    Quit

WHEN A SESSION ENDS:
  Enter  Start the next session
  s      Skip the next session
  q      Quit")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Data directory holding config.yaml, stats.json and logs
    #[arg(long, value_name = "DIR", env = "POMODORO_HOME", global = true)]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the timer
    ///
    /// Opens the full-screen timer and starts a work session. The completed
    /// count picks up from today's entry in the stats file.
    ///
    /// # Examples
    ///
    ///   pomodoro start
    ///   pomodoro --home /tmp/pomo start
    Start,

    /// Show the version number
    Version,

    /// Show completed work sessions per day
    ///
    /// # Examples
    ///
    ///   pomodoro stats
    ///   pomodoro stats --days 30
    ///   pomodoro stats -o json
    Stats {
        /// Number of days of history to show (1 to 3650)
        #[arg(
            long,
            short = 'd',
            default_value = "7",
            value_parser = clap::value_parser!(u16).range(1..=MAX_STATS_DAYS)
        )]
        days: u16,
    },

    /// Generate a shell completion script
    ///
    /// # Examples
    ///
    ///   pomodoro completions zsh > ~/.zsh/completions/_pomodoro
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
