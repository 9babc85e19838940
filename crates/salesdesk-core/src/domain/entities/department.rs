//! The `Department` entity.

use serde::{Deserialize, Serialize};

use crate::domain::entities::common::EntityId;

/// A department record.
///
/// A department with no id has not been persisted yet; the gateway assigns
/// the id on first save. Field values only change through form extraction;
/// the only mutator is `assigned`, which the storage layer uses to stamp a
/// freshly inserted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    id: Option<EntityId>,
    name: String,
}

impl Department {
    /// A new, unsaved department.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// A department as loaded from storage.
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    pub const fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return this record with its id set.
    pub fn assigned(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }
}
