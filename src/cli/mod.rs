//! Command-line surface: argument parsing, command handlers and console
//! output.

mod handlers;
mod output;

pub use handlers::{
    CommandHandlers, EXIT_FAILURE, EXIT_SUCCESS, parse_exit_code, render_failure, render_task_line,
};
pub use output::{ConsoleLine, ConsoleOutput, RecordingConsole, StdConsole};

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::STORE_PATH_ENV;
use crate::task::domain::TaskId;

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tasktracker", version, about = "Personal task tracker")]
pub struct Cli {
    /// Task store file [default: ~/.tasktracker/tasks.json]
    #[arg(long, global = true, env = STORE_PATH_ENV, value_name = "PATH")]
    pub file: Option<Utf8PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Task commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },
    /// List all tasks
    List,
    /// Update task status
    Update {
        /// Task ID
        id: TaskId,
        /// New status: New, InProgress, Completed, Cancelled
        #[arg(short, long)]
        status: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
}
