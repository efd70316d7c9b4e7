//! Composition root.
//!
//! Builds the repository, clock and lifecycle service explicitly for one
//! invocation and hands them to the command handlers.

use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::cli::{Cli, CommandHandlers, ConsoleOutput, EXIT_FAILURE};
use crate::config::{AppConfig, ConfigError};
use crate::task::{
    adapters::json::JsonTaskRepository, ports::TaskRepositoryError,
    services::TaskLifecycleService,
};

/// Lifecycle service wired to the JSON store and the system clock.
pub type TaskService = TaskLifecycleService<JsonTaskRepository, DefaultClock>;

/// Errors raised before a command can run.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The task store could not be opened.
    #[error("failed to open task store: {0}")]
    Store(#[from] TaskRepositoryError),
}

/// Builds the lifecycle service for `config`.
///
/// # Errors
///
/// Returns [`StartupError::Store`] when the store directory cannot be created
/// or opened.
pub fn build_service(config: &AppConfig) -> Result<TaskService, StartupError> {
    let repository = JsonTaskRepository::open(config.store_path().to_path_buf())?;
    debug!(
        path = %repository.path(),
        level = config.log_level().as_filter(),
        "task service ready"
    );
    Ok(TaskLifecycleService::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
    ))
}

/// Runs one parsed invocation and returns its exit code.
pub async fn run<O>(cli: Cli, output: &O) -> u8
where
    O: ConsoleOutput + ?Sized,
{
    let service = match AppConfig::resolve(cli.file, cli.verbose)
        .map_err(StartupError::from)
        .and_then(|config| build_service(&config))
    {
        Ok(service) => service,
        Err(err) => {
            output.write_error(&format!("Error: {err}"));
            return EXIT_FAILURE;
        }
    };

    CommandHandlers::new(&service, output)
        .dispatch(cli.command)
        .await
}
