//! Console output port and its implementations.

use std::io::{self, Write as _};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Destination for user-facing lines.
pub trait ConsoleOutput: Send + Sync {
    /// Writes an informational line.
    fn write_line(&self, message: &str);

    /// Writes an error line.
    fn write_error(&self, message: &str);
}

/// Writes lines to stdout and errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl ConsoleOutput for StdConsole {
    fn write_line(&self, message: &str) {
        if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
            debug!(error = %err, "stdout write failed");
        }
    }

    fn write_error(&self, message: &str) {
        if let Err(err) = writeln!(io::stderr().lock(), "{message}") {
            debug!(error = %err, "stderr write failed");
        }
    }
}

/// A line captured by [`RecordingConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    /// Informational line.
    Out(String),
    /// Error line.
    Err(String),
}

/// Captures lines in memory, in write order.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<ConsoleLine>>,
}

impl RecordingConsole {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every captured line.
    #[must_use]
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.guard().clone()
    }

    /// Returns the captured informational lines.
    #[must_use]
    pub fn out_lines(&self) -> Vec<String> {
        self.guard()
            .iter()
            .filter_map(|line| match line {
                ConsoleLine::Out(text) => Some(text.clone()),
                ConsoleLine::Err(_) => None,
            })
            .collect()
    }

    /// Returns the captured error lines.
    #[must_use]
    pub fn err_lines(&self) -> Vec<String> {
        self.guard()
            .iter()
            .filter_map(|line| match line {
                ConsoleLine::Err(text) => Some(text.clone()),
                ConsoleLine::Out(_) => None,
            })
            .collect()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<ConsoleLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConsoleOutput for RecordingConsole {
    fn write_line(&self, message: &str) {
        self.guard().push(ConsoleLine::Out(message.to_owned()));
    }

    fn write_error(&self, message: &str) {
        self.guard().push(ConsoleLine::Err(message.to_owned()));
    }
}
