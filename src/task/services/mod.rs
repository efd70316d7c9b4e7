//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    TASK_NOT_FOUND, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService, TaskOperation,
};
