//! Default description validator.

use crate::task::{
    ports::{DescriptionValidator, ValidationOutcome},
    validation::rules,
};

/// Applies every description rule, collecting all failures.
///
/// # Examples
///
/// ```
/// use tasktracker::task::ports::DescriptionValidator;
/// use tasktracker::task::validation::DefaultDescriptionValidator;
///
/// let validator = DefaultDescriptionValidator::new();
/// assert!(validator.validate("Buy milk").is_valid());
/// assert_eq!(
///     validator.validate("   ").errors(),
///     ["Task description is required."]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDescriptionValidator;

impl DefaultDescriptionValidator {
    /// Creates a validator with the standard rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DescriptionValidator for DefaultDescriptionValidator {
    fn validate(&self, description: &str) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::valid();

        if let Some(error) = rules::require_description(description) {
            outcome.add_error(error);
        }

        outcome
    }
}
