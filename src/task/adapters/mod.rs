//! Adapter implementations of the task ports.
//!
//! - [`json`]: single-file JSON store used by the command-line tool
//! - [`memory`]: in-process store for tests and embedders

pub mod json;
pub mod memory;
