use thiserror::Error;

use crate::domain::validation::ValidationErrorSet;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers keep them across retry attempts)
/// - Categorizable (for CLI display)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// One or more form fields failed validation.
    ///
    /// The set is exhaustive: every field was checked exactly once before
    /// this error was produced, so the UI layer can display all problems
    /// simultaneously.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrorSet),

    /// Zero is the storage layer's "unset" sentinel and never a valid id.
    #[error("id must be a nonzero integer")]
    ZeroId,

    /// An id field that could not be parsed at all.
    #[error("invalid id: '{value}'")]
    InvalidId { value: String },

    /// A field name that no form defines.
    #[error("unknown field: '{name}'")]
    UnknownField { name: String },
}

impl From<ValidationErrorSet> for DomainError {
    fn from(errors: ValidationErrorSet) -> Self {
        Self::Validation(errors)
    }
}

impl DomainError {
    /// Get error category for display purposes.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::ZeroId | Self::InvalidId { .. } | Self::UnknownField { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
