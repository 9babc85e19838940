//! Department form binder.

use crate::domain::binding::{DepartmentFieldValues, FormatConfig};
use crate::domain::entities::{Department, EntityId};
use crate::domain::validation::{self, ValidationErrorSet};
use crate::domain::value_objects::Field;

/// Maximum department name length, carried over from the form's input mask.
pub const NAME_MAX_LEN: usize = 30;

/// Two-way translation between raw department field values and the entity.
pub struct DepartmentBinder;

impl DepartmentBinder {
    /// Format each attribute of `entity` for display.
    pub fn load(entity: &Department, _config: &FormatConfig) -> DepartmentFieldValues {
        DepartmentFieldValues {
            id: entity.id().map(|id| id.to_string()).unwrap_or_default(),
            name: entity.name().to_string(),
        }
    }

    /// Parse raw field values into a department.
    ///
    /// Every field is checked exactly once; the error set is exhaustive, so
    /// a caller can surface all problems at the same time. Either a fully
    /// valid entity comes back or nothing does.
    pub fn extract(values: &DepartmentFieldValues) -> Result<Department, ValidationErrorSet> {
        let mut errors = ValidationErrorSet::new();

        let id = EntityId::parse_lenient(&values.id);
        let name = validation::require_text(&mut errors, Field::Name, &values.name, NAME_MAX_LEN);

        // Each rule returns None exactly when it recorded an error.
        let Some(name) = name else {
            return Err(errors);
        };
        debug_assert!(errors.is_empty());

        let entity = Department::new(name);
        Ok(match id {
            Some(id) => entity.assigned(id),
            None => entity,
        })
    }
}
