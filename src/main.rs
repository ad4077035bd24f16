use clap::{CommandFactory, Parser};
use colored::Colorize;

use pomodoro::cli::args::{Cli, Commands};
use pomodoro::cli::{self, commands};
use pomodoro::config::Paths;
use pomodoro::error::PomodoroError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), PomodoroError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            cli::report_parse_error(&e);
            return Ok(());
        }
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let format = cli.output;
    let output = match command {
        Commands::Start => commands::start(&Paths::resolve(cli.home)?)?,
        Commands::Version => commands::version(),
        Commands::Stats { days } => {
            commands::stats(&Paths::resolve(cli.home)?, usize::from(days), format)?
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
