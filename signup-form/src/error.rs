//! Error types.

use crate::validation::ValidationErrorSet;

/// Errors returned by form operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormError {
    /// A host addressed a field name the form does not have.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Submit or reset was requested while a submission is pending.
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// Full-schema validation failed on submit.
    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(ValidationErrorSet),

    /// The submit handler reported a failure.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Errors reported by a submit handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The receiving side refused the data.
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The receiving side could not be reached.
    #[error("Submission target unavailable: {0}")]
    Unavailable(String),
}

impl FormError {
    /// Returns the per-field errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrorSet> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
