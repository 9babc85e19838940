use super::DomainError;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A record identifier guaranteed to be nonzero.
///
/// Invariant: never zero. Enforced at construction. An absent id
/// (`Option<EntityId>::None`) marks a record that has not been persisted yet;
/// zero is reserved as the "unset" sentinel of the storage layer and must not
/// leak into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// Create a new id.
    ///
    /// # Panics
    /// Panics if `raw` is zero (use `try_new` for fallible).
    pub fn new(raw: u32) -> Self {
        assert!(raw != 0, "EntityId cannot be zero");
        Self(raw)
    }

    /// Fallible constructor.
    pub fn try_new(raw: u32) -> Result<Self, DomainError> {
        if raw == 0 {
            Err(DomainError::ZeroId)
        } else {
            Ok(Self(raw))
        }
    }

    /// Best-effort parse of a raw form field.
    ///
    /// Empty, whitespace-only, unparsable, and zero input all yield `None`
    /// (an unset id), never an error. Mirrors the form contract that an id
    /// field falls back to "new record" instead of failing.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(|n| Self::try_new(n).ok())
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().parse::<u32>().map_err(|_| DomainError::InvalidId {
            value: s.to_string(),
        })?;
        Self::try_new(raw)
    }
}
