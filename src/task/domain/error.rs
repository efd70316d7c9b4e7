//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing a task status from free text.
///
/// The message names every accepted value so it can be shown to users as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid status '{0}'. Valid values: New, InProgress, Completed, Cancelled")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task identifier from free text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task id '{0}', expected a UUID")]
pub struct ParseTaskIdError(pub String);
