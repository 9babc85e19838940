//! Comprehensive error handling for the Salesdesk CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions (field-level for validation failures)
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use salesdesk_core::domain::{EntityId, ValidationErrorSet};
use salesdesk_core::error::{ErrorCategory as CoreCategory, SalesdeskError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input caught before the form layer (bad `--id`, etc.).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// One or more form fields failed validation.
    ///
    /// Carried separately from [`CliError::Core`] so the per-field messages
    /// can be rendered as individual lines; the whole point of exhaustive
    /// validation is that the user sees every problem at once.
    #[error("Invalid form input")]
    ValidationFailed { errors: ValidationErrorSet },

    /// An update referred to a record that is not in the store.
    #[error("No {kind} with id {id}")]
    RecordNotFound { kind: &'static str, id: EntityId },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `salesdesk-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals. Validation
    /// failures are peeled off into [`CliError::ValidationFailed`] by the
    /// `From` impl below and never reach this variant.
    #[error("{0}")]
    Core(SalesdeskError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<SalesdeskError> for CliError {
    fn from(err: SalesdeskError) -> Self {
        match err.validation_errors() {
            Some(errors) => CliError::ValidationFailed {
                errors: errors.clone(),
            },
            None => CliError::Core(err),
        }
    }
}

impl From<salesdesk_core::application::PersistenceError> for CliError {
    fn from(err: salesdesk_core::application::PersistenceError) -> Self {
        CliError::Core(SalesdeskError::Form(
            salesdesk_core::application::FormError::Persistence(err),
        ))
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ValidationFailed { errors } => {
                let mut suggestions: Vec<String> = errors
                    .iter()
                    .map(|(field, message)| format!("  \u{2022} {field}: {message}"))
                    .collect();
                suggestions.push("Fix the fields above and retry".into());
                suggestions
            }

            Self::RecordNotFound { kind, .. } => vec![
                format!("List stored records: salesdesk {} list", kind),
                "Omit --id to add a new record instead".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file, or run 'salesdesk init --force' to rewrite it".into(),
            ],

            Self::Core(core_err) => match core_err.category() {
                CoreCategory::Persistence => vec![
                    "The record store refused the operation".into(),
                    "Check the storage path in 'salesdesk config'".into(),
                    "Check file permissions and available disk space".into(),
                ],
                CoreCategory::Contract | CoreCategory::Internal => vec![
                    "This looks like a bug in salesdesk".into(),
                    "Please report it with the -vvv output attached".into(),
                ],
                CoreCategory::Validation => vec!["Check the field values and retry".into()],
            },

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ValidationFailed { .. } => ErrorCategory::UserError,
            Self::RecordNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Contract => ErrorCategory::Internal,
                CoreCategory::Persistence => ErrorCategory::Internal,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        let _ = write!(
            output,
            "\n{} {}\n\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold()
        );

        // Main error message
        let _ = writeln!(output, "  {}", self.to_string().red());

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(
                    output,
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                );
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {}", suggestion);
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            let _ = writeln!(
                output,
                "{} {}",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\nError: {}\n", self);

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
