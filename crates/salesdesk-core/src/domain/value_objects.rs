//! Domain value objects: form field names.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity. A `Field`
//! identifies one form control; the string representation is the kebab-case
//! name the CLI surface also uses for its flags, so a validation message and
//! the flag it refers to always line up.
//!
//! The `Ord` derive follows declaration order, which is the visual order of
//! the form. `ValidationErrorSet` relies on this to report errors top-to-
//! bottom.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A form field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Id,
    Name,
    Email,
    BirthDate,
    BaseSalary,
    Department,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::BirthDate => "birth-date",
            Self::BaseSalary => "base-salary",
            Self::Department => "department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "birth-date" | "birthdate" => Ok(Self::BirthDate),
            "base-salary" | "basesalary" => Ok(Self::BaseSalary),
            "department" => Ok(Self::Department),
            other => Err(DomainError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}
