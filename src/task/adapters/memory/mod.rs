//! In-memory repository for task tracking tests and embedders.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks.into_iter().collect())),
        }
    }
}

fn lock_poisoned(message: String) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(message))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn load_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|e| lock_poisoned(format!("lock poisoned: {e}")))?;
        Ok(tasks.clone())
    }

    async fn add(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|e| lock_poisoned(format!("lock poisoned: {e}")))?;
        if tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(|e| lock_poisoned(format!("lock poisoned: {e}")))?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|e| lock_poisoned(format!("lock poisoned: {e}")))?;
        if let Some(slot) = tasks.iter_mut().find(|existing| existing.id() == task.id()) {
            *slot = task.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(|e| lock_poisoned(format!("lock poisoned: {e}")))?;
        tasks.retain(|task| task.id() != id);
        Ok(())
    }
}
