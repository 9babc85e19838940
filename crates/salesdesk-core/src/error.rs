//! Unified error handling for Salesdesk Core.
//!
//! This module provides a unified error type that wraps domain and form
//! errors so callers outside the crate handle one enum.

use thiserror::Error;

use crate::application::FormError;
use crate::domain::DomainError;

/// Root error type for Salesdesk Core operations.
#[derive(Debug, Error, Clone)]
pub enum SalesdeskError {
    /// Errors from the domain layer (field rules, identifiers).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the form boundary (contract, validation, persistence).
    #[error("{0}")]
    Form(#[from] FormError),
}

impl SalesdeskError {
    /// Get error category for display/styling purposes.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Form(e) => e.category(),
        }
    }

    /// The field errors, when this wraps a validation failure.
    pub fn validation_errors(&self) -> Option<&crate::domain::ValidationErrorSet> {
        match self {
            Self::Domain(DomainError::Validation(errors)) => Some(errors),
            Self::Form(form) => form.validation_errors(),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or missing user input; recoverable per field.
    Validation,
    /// Caller contract violation (entity not set before use).
    Contract,
    /// The storage layer refused the operation.
    Persistence,
    /// Unexpected internal failure.
    Internal,
}

/// Convenient result type alias.
pub type SalesdeskResult<T> = Result<T, SalesdeskError>;
