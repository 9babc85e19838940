//! Application layer errors.
//!
//! These errors represent failures at the form boundary, not business
//! logic. Field-level rules live in `crate::domain` and produce a
//! `ValidationErrorSet`; this layer wraps that set together with the two
//! other things that can go wrong during a save.

use thiserror::Error;

use crate::application::ports::PersistenceError;
use crate::domain::ValidationErrorSet;
use crate::error::ErrorCategory;

/// Errors that occur while driving a form.
#[derive(Debug, Error, Clone)]
pub enum FormError {
    /// An operation that needs the in-edit entity ran before `set_entity`.
    ///
    /// This is a caller contract violation (the windowing layer must
    /// install a record before loading the form) and is not recoverable by
    /// the person at the keyboard.
    #[error("no {form} entity has been set")]
    EntityNotSet { form: &'static str },

    /// One or more fields failed validation. Recoverable: the save is
    /// aborted, nothing is persisted, and the set carries one message per
    /// offending field for the UI to display simultaneously.
    #[error("{0}")]
    Validation(ValidationErrorSet),

    /// The gateway refused the save. Surfaced as a single user-visible
    /// message; the form stays open and the in-edit entity is unchanged.
    #[error("error saving record: {0}")]
    Persistence(#[from] PersistenceError),
}

impl FormError {
    /// Get error category.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EntityNotSet { .. } => ErrorCategory::Contract,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Persistence(_) => ErrorCategory::Persistence,
        }
    }

    /// The field errors, when this is a validation failure.
    pub const fn validation_errors(&self) -> Option<&ValidationErrorSet> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
