//! Command-line interface.

pub mod args;
pub mod commands;

use clap::error::ErrorKind;

/// Hint printed after an invalid invocation.
pub const USAGE_HINT: &str = "Run 'pomodoro help' to see available commands.";

/// Whether a parse failure is a help or version request rather than a mistake.
#[must_use]
pub const fn is_informational(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// Print a clap parse failure.
///
/// Help and version output go to stdout. Anything else is an invalid
/// invocation: clap's message and a usage hint go to stderr. Neither case is
/// treated as a failure of the program.
pub fn report_parse_error(err: &clap::Error) {
    if let Err(e) = err.print() {
        tracing::debug!("Failed to print parse error: {e}");
    }
    if !is_informational(err.kind()) {
        eprintln!("{USAGE_HINT}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use clap::Parser;

    fn parse_err(args: &[&str]) -> clap::Error {
        match Cli::try_parse_from(args) {
            Ok(_) => panic!("Expected parse failure for {args:?}"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_help_is_informational() {
        assert!(is_informational(parse_err(&["pomodoro", "help"]).kind()));
        assert!(is_informational(parse_err(&["pomodoro", "--help"]).kind()));
        assert!(is_informational(parse_err(&["pomodoro", "--version"]).kind()));
    }

    #[test]
    fn test_unknown_command_is_not_informational() {
        let err = parse_err(&["pomodoro", "bogus"]);
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert!(!is_informational(err.kind()));
    }

    #[test]
    fn test_bad_value_is_not_informational() {
        let err = parse_err(&["pomodoro", "stats", "--days", "lots"]);
        assert!(!is_informational(err.kind()));
    }
}
