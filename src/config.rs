//! Runtime configuration for the command-line tool.
//!
//! The store path is taken from the `--file` flag, then the
//! `TASKTRACKER_FILE` environment variable (both handled by the argument
//! parser), then `<home>/.tasktracker/tasks.json`.

use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::task::adapters::json::{DEFAULT_STORE_DIR, DEFAULT_STORE_FILE};

/// Environment variable overriding the store path.
pub const STORE_PATH_ENV: &str = "TASKTRACKER_FILE";

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The user's home directory could not be determined.
    #[error("could not determine the user's home directory")]
    HomeDirectoryUnavailable,

    /// A required path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// Log verbosity selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Warnings and errors only.
    #[default]
    Warn,
    /// Operation summaries.
    Info,
    /// Repository and service detail.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Maps a repeated `-v` count to a level.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Returns the filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    store_path: Utf8PathBuf,
    log_level: LogLevel,
}

impl AppConfig {
    /// Resolves the configuration, falling back to the default store path
    /// when no override is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the default path is needed and cannot be
    /// derived from the home directory.
    pub fn resolve(store_override: Option<Utf8PathBuf>, verbosity: u8) -> Result<Self, ConfigError> {
        let store_path = match store_override {
            Some(path) => path,
            None => default_store_path()?,
        };
        Ok(Self {
            store_path,
            log_level: LogLevel::from_verbosity(verbosity),
        })
    }

    /// Returns the store file path.
    #[must_use]
    pub fn store_path(&self) -> &Utf8Path {
        &self.store_path
    }

    /// Returns the selected log level.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }
}

/// Returns `<home>/.tasktracker/tasks.json` for the current user.
///
/// # Errors
///
/// Returns [`ConfigError::HomeDirectoryUnavailable`] when no home directory is
/// known and [`ConfigError::NonUtf8Path`] when it is not valid UTF-8.
pub fn default_store_path() -> Result<Utf8PathBuf, ConfigError> {
    let dirs = BaseDirs::new().ok_or(ConfigError::HomeDirectoryUnavailable)?;
    store_path_in(dirs.home_dir())
}

/// Returns the default store location under `home`.
///
/// # Errors
///
/// Returns [`ConfigError::NonUtf8Path`] when `home` is not valid UTF-8.
pub fn store_path_in(home: &Path) -> Result<Utf8PathBuf, ConfigError> {
    let utf8_home =
        Utf8Path::from_path(home).ok_or_else(|| ConfigError::NonUtf8Path(home.to_path_buf()))?;
    Ok(utf8_home.join(DEFAULT_STORE_DIR).join(DEFAULT_STORE_FILE))
}
