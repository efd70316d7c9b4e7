//! Task description validation.
//!
//! Provides the default implementation of the
//! [`DescriptionValidator`](crate::task::ports::DescriptionValidator) port.

pub mod rules;
mod service;

pub use rules::DESCRIPTION_REQUIRED;
pub use service::DefaultDescriptionValidator;
