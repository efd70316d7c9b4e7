//! Identifier generation port.

use crate::task::domain::TaskId;

/// Source of fresh task identifiers.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns an identifier not handed out before, for practical purposes.
    fn new_id(&self) -> TaskId;
}

/// Generates random version 4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTaskIdGenerator;

impl TaskIdGenerator for RandomTaskIdGenerator {
    fn new_id(&self) -> TaskId {
        TaskId::new()
    }
}
