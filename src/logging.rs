//! Log subscriber installation.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::LogLevel;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Chooses the filter directive: a non-blank `RUST_LOG` value wins over the
/// level selected with `-v`.
#[must_use]
pub fn filter_directive(env_directive: Option<&str>, level: LogLevel) -> String {
    let fallback = level.as_filter();
    env_directive
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

/// Installs a formatting subscriber writing to stderr.
///
/// The filter comes from [`filter_directive`]; an unparseable `RUST_LOG`
/// value falls back to `level`.
///
/// # Errors
///
/// Returns [`LoggingError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(level: LogLevel) -> Result<(), LoggingError> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env_directive.as_deref(), level);
    let filter = match EnvFilter::try_new(&directive) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level.as_filter())?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
