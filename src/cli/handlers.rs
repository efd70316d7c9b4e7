//! Command handlers translating parsed commands into service calls.
//!
//! Each handler calls at most one service operation, renders the outcome
//! through a [`ConsoleOutput`] and returns the process exit code.

use mockable::Clock;

use super::{Command, ConsoleOutput};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Exit code for a successful command.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for a failed command.
pub const EXIT_FAILURE: u8 = 1;

/// Maps an argument-parsing error to the process exit code.
///
/// Help and version requests exit with [`EXIT_SUCCESS`]; usage errors exit
/// with [`EXIT_FAILURE`].
#[must_use]
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Formats one task for the `list` command.
///
/// `[<id>] <description> - Status: <status> - Created: <YYYY-MM-DD>`
#[must_use]
pub fn render_task_line(task: &Task) -> String {
    format!(
        "[{}] {} - Status: {} - Created: {}",
        task.id(),
        task.description(),
        task.status(),
        task.created_at().format("%Y-%m-%d")
    )
}

/// Formats a service failure as a single error line.
#[must_use]
pub fn render_failure(err: &TaskLifecycleError) -> String {
    format!("Error: {}", err.messages().join(", "))
}

/// Handlers for the task commands.
pub struct CommandHandlers<'a, R, C, O>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    O: ConsoleOutput + ?Sized,
{
    service: &'a TaskLifecycleService<R, C>,
    output: &'a O,
}

impl<'a, R, C, O> CommandHandlers<'a, R, C, O>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    O: ConsoleOutput + ?Sized,
{
    /// Creates handlers over a service and an output.
    #[must_use]
    pub const fn new(service: &'a TaskLifecycleService<R, C>, output: &'a O) -> Self {
        Self { service, output }
    }

    /// Runs the handler matching `command`.
    pub async fn dispatch(&self, command: Command) -> u8 {
        match command {
            Command::Add { description } => self.add(&description).await,
            Command::List => self.list().await,
            Command::Update { id, status } => self.update(id, &status).await,
            Command::Delete { id } => self.delete(id).await,
        }
    }

    /// Handles `add <description>`.
    pub async fn add(&self, description: &str) -> u8 {
        match self.service.add(description).await {
            Ok(task) => self.succeed(&format!("Task added successfully: {}", task.description())),
            Err(err) => self.fail(&err),
        }
    }

    /// Handles `list`.
    pub async fn list(&self) -> u8 {
        let tasks = match self.service.get_all().await {
            Ok(tasks) => tasks,
            Err(err) => return self.fail(&err),
        };

        if tasks.is_empty() {
            return self.succeed("No tasks found.");
        }

        self.output.write_line("Tasks:");
        for task in &tasks {
            self.output.write_line(&render_task_line(task));
        }
        EXIT_SUCCESS
    }

    /// Handles `update <id> --status <status>`.
    ///
    /// The status is parsed case-insensitively; an unknown value is reported
    /// without calling the service.
    pub async fn update(&self, id: TaskId, requested: &str) -> u8 {
        let status = match requested.parse::<TaskStatus>() {
            Ok(status) => status,
            Err(err) => {
                self.output.write_error(&err.to_string());
                return EXIT_FAILURE;
            }
        };

        match self.service.update_status(id, status).await {
            Ok(task) => self.succeed(&format!(
                "Task updated successfully: {} - Status: {}",
                task.description(),
                task.status()
            )),
            Err(err) => self.fail(&err),
        }
    }

    /// Handles `delete <id>`.
    pub async fn delete(&self, id: TaskId) -> u8 {
        match self.service.delete(id).await {
            Ok(task) => self.succeed(&format!("Task deleted successfully: {}", task.description())),
            Err(err) => self.fail(&err),
        }
    }

    fn succeed(&self, message: &str) -> u8 {
        self.output.write_line(message);
        EXIT_SUCCESS
    }

    fn fail(&self, err: &TaskLifecycleError) -> u8 {
        self.output.write_error(&render_failure(err));
        EXIT_FAILURE
    }
}
