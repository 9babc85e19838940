//! Seller form binder.

use crate::domain::binding::{FormatConfig, SellerFieldValues};
use crate::domain::entities::{Department, EntityId, Seller};
use crate::domain::validation::{self, ValidationErrorSet};
use crate::domain::value_objects::Field;

/// Field length limits carried over from the form's input masks.
pub const NAME_MAX_LEN: usize = 70;
pub const EMAIL_MAX_LEN: usize = 60;

/// Two-way translation between raw seller field values and the entity.
///
/// Extraction needs the department candidate list: the department field is a
/// selection, and a selection is only valid if it points at a candidate that
/// was actually offered.
pub struct SellerBinder<'a> {
    departments: &'a [Department],
}

impl<'a> SellerBinder<'a> {
    pub fn new(departments: &'a [Department]) -> Self {
        Self { departments }
    }

    /// Format each attribute of `entity` for display.
    pub fn load(entity: &Seller, config: &FormatConfig) -> SellerFieldValues {
        SellerFieldValues {
            id: entity.id().map(|id| id.to_string()).unwrap_or_default(),
            name: entity.name().to_string(),
            email: entity.email().to_string(),
            birth_date: config.format_date(entity.birth_date()),
            base_salary: config.format_salary(entity.base_salary()),
            department: Some(entity.department_id()),
        }
    }

    /// Parse raw field values into a seller.
    ///
    /// Every field is checked exactly once. The error set accumulates all
    /// violations instead of failing fast, so the UI layer can light up each
    /// problem field at once. Either a fully valid entity comes back or
    /// nothing does.
    pub fn extract(
        &self,
        values: &SellerFieldValues,
        config: &FormatConfig,
    ) -> Result<Seller, ValidationErrorSet> {
        let mut errors = ValidationErrorSet::new();

        let id = EntityId::parse_lenient(&values.id);
        let name = validation::require_text(&mut errors, Field::Name, &values.name, NAME_MAX_LEN);
        let email =
            validation::require_text(&mut errors, Field::Email, &values.email, EMAIL_MAX_LEN);
        let birth_date =
            validation::require_date(&mut errors, Field::BirthDate, &values.birth_date, config);
        let base_salary =
            validation::require_decimal(&mut errors, Field::BaseSalary, &values.base_salary);
        let department_id =
            validation::require_department(&mut errors, values.department, self.departments);

        // Each rule returns None exactly when it recorded an error.
        let (Some(name), Some(email), Some(birth_date), Some(base_salary), Some(department_id)) =
            (name, email, birth_date, base_salary, department_id)
        else {
            return Err(errors);
        };
        debug_assert!(errors.is_empty());

        let entity = Seller::new(name, email, birth_date, base_salary, department_id);
        Ok(match id {
            Some(id) => entity.assigned(id),
            None => entity,
        })
    }
}
