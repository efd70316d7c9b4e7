//! Personal task tracker.
//!
//! Usage:
//!
//! ```text
//! tasktracker add "Buy milk"
//! tasktracker list
//! tasktracker update <id> --status InProgress
//! tasktracker delete <id>
//! ```
//!
//! Tasks are stored in `~/.tasktracker/tasks.json` unless `--file` or
//! `TASKTRACKER_FILE` names another file. Exit code is 0 on success and 1 on
//! any failure.

use clap::Parser;
use std::process::ExitCode;
use tasktracker::cli::{Cli, ConsoleOutput, EXIT_FAILURE, StdConsole, parse_exit_code};
use tasktracker::config::LogLevel;
use tasktracker::{app, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if let Err(io_err) = err.print() {
                StdConsole.write_error(&io_err.to_string());
            }
            return ExitCode::from(parse_exit_code(&err));
        }
    };

    if let Err(err) = logging::init(LogLevel::from_verbosity(cli.verbose)) {
        StdConsole.write_error(&format!("Error: {err}"));
        return ExitCode::from(EXIT_FAILURE);
    }

    ExitCode::from(app::run(cli, &StdConsole).await)
}
