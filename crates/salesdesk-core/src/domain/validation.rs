//! Field-level validation: the error set and the per-field rules.
//!
//! All form validation rules live here, not scattered across binders. Each
//! rule checks one field, records at most one message for it, and never
//! short-circuits; the caller runs every rule once so the resulting set is
//! exhaustive rather than fail-fast.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use chrono::{DateTime, Utc};

use crate::domain::binding::FormatConfig;
use crate::domain::entities::{Department, EntityId};
use crate::domain::value_objects::Field;

/// Message for a required field left empty or whitespace-only.
pub const MSG_EMPTY: &str = "Field can't be empty";
/// Message for a numeric field that does not parse.
pub const MSG_INVALID_NUMBER: &str = "Invalid number";
/// Message for a date field that does not parse with the configured format.
pub const MSG_INVALID_DATE: &str = "Invalid date";
/// Message for a reference field pointing outside the candidate list.
pub const MSG_UNKNOWN_DEPARTMENT: &str = "Unknown department";

/// Accumulated field-level validation errors.
///
/// At most one message per field; iteration follows the visual order of the
/// form (`Field`'s declaration order). Each field owns its own slot, so two
/// unrelated fields never share a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorSet {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fields and messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Turn an accumulated set into the extraction result: `Ok(value)` when
    /// no rule recorded an error, otherwise the complete set.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrorSet> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

// ── Per-field rules ───────────────────────────────────────────────────────────

/// Required text field: trims, rejects empty input and input over `max_len`
/// characters. Returns the trimmed value when valid.
pub(crate) fn require_text(
    errors: &mut ValidationErrorSet,
    field: Field,
    raw: &str,
    max_len: usize,
) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, MSG_EMPTY);
        return None;
    }
    if trimmed.chars().count() > max_len {
        errors.add(field, format!("Field can't exceed {max_len} characters"));
        return None;
    }
    Some(trimmed.to_string())
}

/// Required decimal field: rejects empty input; non-empty input that does
/// not parse is an error as well. A widget with a numeric input mask never
/// produces this case, a raw-string surface does.
pub(crate) fn require_decimal(
    errors: &mut ValidationErrorSet,
    field: Field,
    raw: &str,
) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, MSG_EMPTY);
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(field, MSG_INVALID_NUMBER);
            None
        }
    }
}

/// Required date field: rejects empty input; non-empty input must parse with
/// the configured display format. The parsed calendar date is normalized to a
/// UTC timestamp at local start-of-day.
pub(crate) fn require_date(
    errors: &mut ValidationErrorSet,
    field: Field,
    raw: &str,
    config: &FormatConfig,
) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, MSG_EMPTY);
        return None;
    }
    match config.parse_date(trimmed) {
        Some(ts) => Some(ts),
        None => {
            errors.add(field, MSG_INVALID_DATE);
            None
        }
    }
}

/// Required reference field: the selection must exist and must be one of the
/// supplied candidates.
pub(crate) fn require_department(
    errors: &mut ValidationErrorSet,
    selection: Option<EntityId>,
    candidates: &[Department],
) -> Option<EntityId> {
    let Some(id) = selection else {
        errors.add(Field::Department, MSG_EMPTY);
        return None;
    };
    if candidates.iter().any(|d| d.id() == Some(id)) {
        Some(id)
    } else {
        errors.add(Field::Department, MSG_UNKNOWN_DEPARTMENT);
        None
    }
}
