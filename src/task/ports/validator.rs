//! Validator port for task descriptions.

/// Outcome of validating a task description.
///
/// A valid outcome carries no errors; an invalid one carries at least one
/// human-readable message, in the order the rules produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<String>,
}

impl ValidationOutcome {
    /// Creates a passing outcome.
    #[must_use]
    pub const fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records a rule failure.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Returns `true` when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the recorded failures.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the outcome, returning the recorded failures.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Port for task description validation.
///
/// Implementations must be pure: no I/O and the same outcome for the same
/// input.
pub trait DescriptionValidator: Send + Sync {
    /// Validates a proposed task description against every rule.
    fn validate(&self, description: &str) -> ValidationOutcome;
}
