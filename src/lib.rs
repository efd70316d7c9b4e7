//! Tasktracker: a personal task-tracking command-line tool.
//!
//! Tasks are added, listed, updated and deleted from the command line and
//! persisted as a JSON array in a single file on local disk.
//!
//! # Architecture
//!
//! Tasktracker follows hexagonal architecture principles:
//!
//! - **Domain**: the task entity and its status, free of infrastructure
//! - **Ports**: trait interfaces for storage, validation and identifiers
//! - **Adapters**: the JSON file store and an in-memory store
//!
//! # Modules
//!
//! - [`task`]: task lifecycle core
//! - [`cli`]: argument parsing, command handlers and console output
//! - [`config`]: store path and verbosity resolution
//! - [`logging`]: log subscriber installation
//! - [`app`]: composition root wiring the pieces together

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod task;
