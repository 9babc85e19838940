//! The `Seller` entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::common::EntityId;

/// A seller record.
///
/// The `department_id` is a non-owning reference: it points into the
/// department list supplied externally (the department gateway owns the
/// lifetime of that list). Birth dates are stored UTC-normalized; the form
/// layer converts to and from the local calendar date at the display
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    id: Option<EntityId>,
    name: String,
    email: String,
    birth_date: DateTime<Utc>,
    base_salary: f64,
    department_id: EntityId,
}

impl Seller {
    /// A new, unsaved seller.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: DateTime<Utc>,
        base_salary: f64,
        department_id: EntityId,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department_id,
        }
    }

    pub const fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    pub const fn base_salary(&self) -> f64 {
        self.base_salary
    }

    pub const fn department_id(&self) -> EntityId {
        self.department_id
    }

    /// Return this record with its id set.
    pub fn assigned(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }
}
