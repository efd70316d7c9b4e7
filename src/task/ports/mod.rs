//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod id_generator;
pub mod repository;
pub mod validator;

pub use id_generator::{RandomTaskIdGenerator, TaskIdGenerator};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{DescriptionValidator, ValidationOutcome};
