//! Domain model for task tracking.
//!
//! The domain holds the task entity, its status and identifier, and keeps
//! persistence and presentation concerns outside of its boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskIdError, ParseTaskStatusError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskStatus};
