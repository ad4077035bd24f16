//! Error types for the pomodoro timer.

use thiserror::Error;

/// Errors that can occur while running the timer.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Configuration could not be read, parsed, or resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// The stats file could not be written.
    #[error("failed to save stats: {0}")]
    Stats(String),

    /// Terminal setup, drawing, or input failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Serialization or parsing failed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PomodoroError {
    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Stats(_) | Self::Terminal(_) | Self::Parse(_) | Self::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PomodoroError::Stats("disk full".to_string());
        assert_eq!(err.to_string(), "failed to save stats: disk full");

        let err = PomodoroError::Config("bad yaml".to_string());
        assert_eq!(err.to_string(), "configuration error: bad yaml");
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        assert_eq!(PomodoroError::Config(String::new()).exit_code(), 2);
        assert_eq!(PomodoroError::Stats(String::new()).exit_code(), 1);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(PomodoroError::from(io).exit_code(), 1);
    }
}
