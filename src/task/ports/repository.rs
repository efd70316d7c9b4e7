//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Expected conditions are ordinary return values: an empty store yields an
/// empty list and an unknown identifier yields `None`.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Corrupted`] when the stored collection
    /// cannot be decoded, or [`TaskRepositoryError::Persistence`] when the
    /// backing store cannot be read.
    async fn load_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Appends a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists, or a load/write failure.
    async fn add(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Replaces the stored task that has the same identifier.
    ///
    /// When no stored task matches, nothing is written and `Ok(())` is
    /// returned.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes every stored task with the given identifier.
    ///
    /// Removing an unknown identifier is not an error.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The stored collection exists but cannot be decoded.
    #[error("task store is corrupted: {0}")]
    Corrupted(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a decoding error.
    pub fn corrupted(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupted(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
