//! Service layer for the task lifecycle: add, list, update status, delete.

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{
        DescriptionValidator, RandomTaskIdGenerator, TaskIdGenerator, TaskRepository,
        TaskRepositoryError,
    },
    validation::DefaultDescriptionValidator,
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Message reported when a task identifier is unknown.
pub const TASK_NOT_FOUND: &str = "Task not found.";

/// Lifecycle operation, used to word persistence failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOperation {
    /// Creating a task.
    Add,
    /// Listing tasks.
    Load,
    /// Changing a task's status.
    Update,
    /// Removing a task.
    Delete,
}

impl TaskOperation {
    /// Returns the user-facing message for a storage failure during this
    /// operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Add => "Failed to add task. Please try again.",
            Self::Load => "Failed to load tasks. Please try again.",
            Self::Update => "Failed to update task. Please try again.",
            Self::Delete => "Failed to delete task. Please try again.",
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Load => "load",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for task lifecycle operations.
///
/// Every variant renders as one or more human-readable messages through
/// [`TaskLifecycleError::messages`].
#[derive(Debug, Clone, Error)]
pub enum TaskLifecycleError {
    /// The description broke at least one validation rule.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// No stored task has the requested identifier.
    #[error("Task not found.")]
    NotFound(TaskId),

    /// The repository failed while serving the operation.
    #[error("{}", .operation.failure_message())]
    Persistence {
        /// Operation that was being served.
        operation: TaskOperation,
        /// Underlying repository failure.
        #[source]
        source: TaskRepositoryError,
    },
}

impl TaskLifecycleError {
    /// Returns the ordered, non-empty list of user-facing messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.clone(),
            Self::NotFound(_) => vec![TASK_NOT_FOUND.to_owned()],
            Self::Persistence { operation, .. } => vec![operation.failure_message().to_owned()],
        }
    }

    fn persistence(operation: TaskOperation, source: TaskRepositoryError) -> Self {
        warn!(%operation, error = %source, "task repository failure");
        Self::Persistence { operation, source }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// The service holds no task state of its own: every operation reads the
/// current collection from the repository before acting.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C, V = DefaultDescriptionValidator, G = RandomTaskIdGenerator>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: DescriptionValidator,
    G: TaskIdGenerator,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validator: Arc<V>,
    ids: Arc<G>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default validator and random identifiers.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_collaborators(
            repository,
            clock,
            Arc::new(DefaultDescriptionValidator::new()),
            Arc::new(RandomTaskIdGenerator),
        )
    }
}

impl<R, C, V, G> TaskLifecycleService<R, C, V, G>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: DescriptionValidator,
    G: TaskIdGenerator,
{
    /// Creates a service from explicitly supplied collaborators.
    #[must_use]
    pub const fn with_collaborators(
        repository: Arc<R>,
        clock: Arc<C>,
        validator: Arc<V>,
        ids: Arc<G>,
    ) -> Self {
        Self {
            repository,
            clock,
            validator,
            ids,
        }
    }

    /// Creates a task in the [`TaskStatus::New`] status.
    ///
    /// The description is validated before the repository is touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a rejected description
    /// and [`TaskLifecycleError::Persistence`] when the task cannot be stored.
    pub async fn add(&self, description: &str) -> TaskLifecycleResult<Task> {
        let outcome = self.validator.validate(description);
        if !outcome.is_valid() {
            debug!(errors = outcome.errors().len(), "task description rejected");
            return Err(TaskLifecycleError::Validation(outcome.into_errors()));
        }

        let task = Task::new(self.ids.new_id(), description, &*self.clock);
        self.repository
            .add(&task)
            .await
            .map_err(|err| TaskLifecycleError::persistence(TaskOperation::Add, err))?;
        info!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Returns every task in storage order; an empty store yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Persistence`] when the store cannot be
    /// read or decoded.
    pub async fn get_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self
            .repository
            .load_all()
            .await
            .map_err(|err| TaskLifecycleError::persistence(TaskOperation::Load, err))?;
        debug!(count = tasks.len(), "tasks loaded");
        Ok(tasks)
    }

    /// Changes the status of an existing task and returns the updated task.
    ///
    /// Only the status changes; any status may replace any other.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has `id`, and
    /// [`TaskLifecycleError::Persistence`] when the lookup or the write fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id, TaskOperation::Update).await?;

        task.set_status(status);
        self.repository
            .update(&task)
            .await
            .map_err(|err| TaskLifecycleError::persistence(TaskOperation::Update, err))?;
        info!(task_id = %id, %status, "task status updated");
        Ok(task)
    }

    /// Removes an existing task and returns it as it was before removal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has `id`, and
    /// [`TaskLifecycleError::Persistence`] when the lookup or the removal
    /// fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let task = self.require(id, TaskOperation::Delete).await?;

        self.repository
            .delete(id)
            .await
            .map_err(|err| TaskLifecycleError::persistence(TaskOperation::Delete, err))?;
        info!(task_id = %id, "task deleted");
        Ok(task)
    }

    async fn require(&self, id: TaskId, operation: TaskOperation) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| TaskLifecycleError::persistence(operation, err))?
            .ok_or_else(|| {
                debug!(task_id = %id, %operation, "task not found");
                TaskLifecycleError::NotFound(id)
            })
    }
}
