//! JSON file repository for task storage.
//!
//! The whole collection lives in a single file as a JSON array. Every
//! mutation reads the full array, changes it in memory and rewrites the file.
//! There is no locking, versioning or atomic rename, so two processes writing
//! the same file concurrently may lose updates (last writer wins).

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Directory created under the user's home for the default store.
pub const DEFAULT_STORE_DIR: &str = ".tasktracker";

/// File name of the default store.
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

/// Task repository backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonTaskRepository {
    store: StoreFile,
    path: Utf8PathBuf,
}

/// Capability-scoped handle on the store file's directory.
#[derive(Debug, Clone)]
struct StoreFile {
    dir: Arc<Dir>,
    file_name: String,
}

impl JsonTaskRepository {
    /// Opens the store at `location`, creating its parent directory when it
    /// does not exist yet. The file itself is only created on first write.
    ///
    /// An existing store that is a symbolic link is followed, so reads and
    /// writes go to the link target.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when `location` has no
    /// file name or the parent directory cannot be created or opened.
    pub fn open(location: impl Into<Utf8PathBuf>) -> TaskRepositoryResult<Self> {
        let path = location.into();
        let (parent, _) = split_location(&path)?;
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(TaskRepositoryError::persistence)?;

        let target = resolve_target(&path)?;
        let (target_dir, file_name) = split_location(&target)?;
        let dir = Dir::open_ambient_dir(target_dir, ambient_authority())
            .map_err(TaskRepositoryError::persistence)?;
        debug!(%path, %target, "opened task store");

        Ok(Self {
            store: StoreFile {
                dir: Arc::new(dir),
                file_name: file_name.to_owned(),
            },
            path,
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&StoreFile) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || f(&store))
            .await
            .map_err(TaskRepositoryError::persistence)?
    }
}

/// Splits a store path into its directory (`.` when bare) and file name.
fn split_location(path: &Utf8Path) -> TaskRepositoryResult<(&Utf8Path, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        TaskRepositoryError::persistence(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("task store path '{path}' must include a file name"),
        ))
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Ok((parent, file_name))
}

/// Returns the canonical path of an existing store, or `path` unchanged when
/// nothing exists there yet.
fn resolve_target(path: &Utf8Path) -> TaskRepositoryResult<Utf8PathBuf> {
    match path.canonicalize_utf8() {
        Ok(target) => Ok(target),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(err) => Err(TaskRepositoryError::persistence(err)),
    }
}

impl StoreFile {
    fn read(&self) -> TaskRepositoryResult<Vec<Task>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => self.decode(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(TaskRepositoryError::persistence(err)),
        }
    }

    fn decode(&self, contents: &str) -> TaskRepositoryResult<Vec<Task>> {
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str::<Option<Vec<Task>>>(contents)
            .map(Option::unwrap_or_default)
            .map_err(|err| {
                warn!(file = %self.file_name, error = %err, "task store could not be decoded");
                TaskRepositoryError::corrupted(err)
            })
    }

    fn write(&self, tasks: &[Task]) -> TaskRepositoryResult<()> {
        let json = serde_json::to_string_pretty(tasks).map_err(TaskRepositoryError::persistence)?;
        self.dir
            .write(&self.file_name, json)
            .map_err(TaskRepositoryError::persistence)?;
        debug!(file = %self.file_name, count = tasks.len(), "task store written");
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for JsonTaskRepository {
    async fn load_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(StoreFile::read).await
    }

    async fn add(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task = task.clone();
        self.run_blocking(move |store| {
            let mut tasks = store.read()?;
            if tasks.iter().any(|existing| existing.id() == task.id()) {
                return Err(TaskRepositoryError::DuplicateTask(task.id()));
            }
            tasks.push(task);
            store.write(&tasks)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.load_all().await?;
        Ok(tasks.into_iter().find(|task| task.id() == id))
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task = task.clone();
        self.run_blocking(move |store| {
            let mut tasks = store.read()?;
            let Some(slot) = tasks.iter_mut().find(|existing| existing.id() == task.id()) else {
                debug!(task_id = %task.id(), "update skipped, task not stored");
                return Ok(());
            };
            *slot = task;
            store.write(&tasks)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |store| {
            let mut tasks = store.read()?;
            tasks.retain(|task| task.id() != id);
            store.write(&tasks)
        })
        .await
    }
}
