//! Individual description rules.
//!
//! Each rule is a pure function returning `Some(message)` when the
//! description breaks it.

/// Message reported for empty or whitespace-only descriptions.
pub const DESCRIPTION_REQUIRED: &str = "Task description is required.";

/// Rejects descriptions that are empty or contain only whitespace.
///
/// Punctuation, length and character set are not restricted.
#[must_use]
pub fn require_description(description: &str) -> Option<&'static str> {
    description
        .trim()
        .is_empty()
        .then_some(DESCRIPTION_REQUIRED)
}
