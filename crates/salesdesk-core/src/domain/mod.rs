//! Core domain layer for Salesdesk.
//!
//! This module contains pure business logic with ZERO I/O dependencies.
//! Persistence and presentation concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: every form operation runs to completion on the caller's
//!   thread in response to one discrete user action
//! - **No I/O**: no filesystem, network, or storage calls
//! - **Immutable entities**: domain objects are `Clone + PartialEq`; they
//!   change only by being replaced with the result of a form extraction
//! - **Exhaustive validation**: rules accumulate into one error set, they
//!   never fail fast

// Public API - what the world sees
pub mod binding;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use binding::{
    DepartmentBinder, DepartmentFieldValues, FormatConfig, SellerBinder, SellerFieldValues,
};
pub use entities::{Department, EntityId, Seller};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::Field;

pub use validation::{
    MSG_EMPTY, MSG_INVALID_DATE, MSG_INVALID_NUMBER, MSG_UNKNOWN_DEPARTMENT, ValidationErrorSet,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn sample_departments() -> Vec<Department> {
        vec![
            Department::with_id(EntityId::new(1), "Sales"),
            Department::with_id(EntityId::new(2), "HR"),
        ]
    }

    fn valid_seller_values() -> SellerFieldValues {
        SellerFieldValues {
            id: String::new(),
            name: "Alice".into(),
            email: "alice@x.com".into(),
            birth_date: "01/01/1980".into(),
            base_salary: "2500.00".into(),
            department: Some(EntityId::new(2)),
        }
    }

    // ========================================================================
    // EntityId Tests
    // ========================================================================

    #[test]
    fn entity_id_rejects_zero() {
        assert!(EntityId::try_new(0).is_err());
        assert_eq!(EntityId::try_new(7).unwrap().get(), 7);
    }

    #[test]
    fn entity_id_lenient_parse_never_errors() {
        assert_eq!(EntityId::parse_lenient("42"), Some(EntityId::new(42)));
        assert_eq!(EntityId::parse_lenient(" 42 "), Some(EntityId::new(42)));
        assert_eq!(EntityId::parse_lenient(""), None);
        assert_eq!(EntityId::parse_lenient("   "), None);
        assert_eq!(EntityId::parse_lenient("abc"), None);
        assert_eq!(EntityId::parse_lenient("0"), None);
        assert_eq!(EntityId::parse_lenient("-3"), None);
    }

    #[test]
    fn entity_id_from_str_is_strict() {
        assert_eq!(EntityId::from_str("7").unwrap(), EntityId::new(7));
        assert!(EntityId::from_str("abc").is_err());
        assert!(EntityId::from_str("0").is_err());
    }

    // ========================================================================
    // Field / ValidationErrorSet Tests
    // ========================================================================

    #[test]
    fn field_parses_both_spellings() {
        assert_eq!(Field::from_str("birth-date").unwrap(), Field::BirthDate);
        assert_eq!(Field::from_str("birthdate").unwrap(), Field::BirthDate);
        assert_eq!(Field::from_str("NAME").unwrap(), Field::Name);
        assert!(Field::from_str("salary!").is_err());
    }

    #[test]
    fn error_set_keeps_one_message_per_field() {
        let mut errors = ValidationErrorSet::new();
        errors.add(Field::Name, "first");
        errors.add(Field::Name, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("second"));
    }

    #[test]
    fn error_set_iterates_in_form_order() {
        let mut errors = ValidationErrorSet::new();
        errors.add(Field::Department, MSG_EMPTY);
        errors.add(Field::Name, MSG_EMPTY);
        errors.add(Field::BirthDate, MSG_EMPTY);

        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::BirthDate, Field::Department]);
    }

    #[test]
    fn error_set_display_is_one_line_per_field() {
        let mut errors = ValidationErrorSet::new();
        errors.add(Field::Name, MSG_EMPTY);
        errors.add(Field::Email, MSG_EMPTY);
        assert_eq!(
            errors.to_string(),
            format!("name: {MSG_EMPTY}\nemail: {MSG_EMPTY}")
        );
    }

    // ========================================================================
    // FormatConfig Tests
    // ========================================================================

    #[test]
    fn salary_renders_two_decimals() {
        let config = FormatConfig::default();
        assert_eq!(config.format_salary(1200.5), "1200.50");
        assert_eq!(config.format_salary(2500.0), "2500.00");
    }

    #[test]
    fn date_format_round_trips() {
        let config = FormatConfig::default();
        let ts = config.parse_date("15/03/1990").unwrap();
        assert_eq!(config.format_date(ts), "15/03/1990");
    }

    #[test]
    fn bad_date_does_not_parse() {
        let config = FormatConfig::default();
        assert!(config.parse_date("1990-03-15").is_none());
        assert!(config.parse_date("32/01/2000").is_none());
        assert!(config.parse_date("").is_none());
    }

    // ========================================================================
    // Department Binder Tests
    // ========================================================================

    #[test]
    fn department_extracts_when_valid() {
        let values = DepartmentFieldValues {
            id: "3".into(),
            name: "  Sales  ".into(),
        };
        let department = DepartmentBinder::extract(&values).unwrap();
        assert_eq!(department.id(), Some(EntityId::new(3)));
        assert_eq!(department.name(), "Sales");
    }

    #[test]
    fn department_unparsable_id_means_new_record() {
        let values = DepartmentFieldValues {
            id: "not-a-number".into(),
            name: "Sales".into(),
        };
        let department = DepartmentBinder::extract(&values).unwrap();
        assert_eq!(department.id(), None);
    }

    #[test]
    fn department_empty_name_fails() {
        let values = DepartmentFieldValues {
            id: String::new(),
            name: "   ".into(),
        };
        let errors = DepartmentBinder::extract(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(MSG_EMPTY));
    }

    #[test]
    fn department_name_over_limit_fails() {
        let values = DepartmentFieldValues {
            id: String::new(),
            name: "x".repeat(31),
        };
        let errors = DepartmentBinder::extract(&values).unwrap_err();
        assert!(errors.contains(Field::Name));
    }

    #[test]
    fn department_load_round_trips() {
        let config = FormatConfig::default();
        let department = Department::with_id(EntityId::new(5), "Logistics");
        let values = DepartmentBinder::load(&department, &config);
        assert_eq!(values.id, "5");
        assert_eq!(DepartmentBinder::extract(&values).unwrap(), department);
    }

    // ========================================================================
    // Seller Binder Tests
    // ========================================================================

    #[test]
    fn seller_extracts_when_all_fields_well_formed() {
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let seller = binder.extract(&valid_seller_values(), &config).unwrap();
        assert_eq!(seller.id(), None);
        assert_eq!(seller.name(), "Alice");
        assert_eq!(seller.email(), "alice@x.com");
        assert_eq!(seller.base_salary(), 2500.0);
        assert_eq!(seller.department_id(), EntityId::new(2));
    }

    #[test]
    fn seller_missing_name_yields_exactly_that_error() {
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let mut values = valid_seller_values();
        values.name = String::new();
        values.email = "a@b.com".into();
        values.birth_date = "15/03/1990".into();
        values.base_salary = "1200.50".into();
        values.department = Some(EntityId::new(1));

        let errors = binder.extract(&values, &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(MSG_EMPTY));
    }

    #[test]
    fn seller_validation_is_exhaustive_not_fail_fast() {
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let values = SellerFieldValues {
            id: String::new(),
            name: String::new(),
            email: "  ".into(),
            birth_date: String::new(),
            base_salary: "2500.00".into(),
            department: Some(EntityId::new(1)),
        };

        let errors = binder.extract(&values, &config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Email));
        assert!(errors.contains(Field::BirthDate));
        assert!(!errors.contains(Field::BaseSalary));
    }

    #[test]
    fn seller_each_field_owns_its_error_slot() {
        // A missing date and a missing department must surface separately.
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let mut values = valid_seller_values();
        values.birth_date = String::new();
        values.department = None;

        let errors = binder.extract(&values, &config).unwrap_err();
        assert_eq!(errors.get(Field::BirthDate), Some(MSG_EMPTY));
        assert_eq!(errors.get(Field::Department), Some(MSG_EMPTY));
    }

    #[test]
    fn seller_unknown_department_is_rejected() {
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let mut values = valid_seller_values();
        values.department = Some(EntityId::new(99));

        let errors = binder.extract(&values, &config).unwrap_err();
        assert_eq!(errors.get(Field::Department), Some(MSG_UNKNOWN_DEPARTMENT));
    }

    #[test]
    fn seller_bad_salary_and_date_are_reported() {
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let mut values = valid_seller_values();
        values.base_salary = "12,5".into();
        values.birth_date = "yesterday".into();

        let errors = binder.extract(&values, &config).unwrap_err();
        assert_eq!(errors.get(Field::BaseSalary), Some(MSG_INVALID_NUMBER));
        assert_eq!(errors.get(Field::BirthDate), Some(MSG_INVALID_DATE));
    }

    #[test]
    fn seller_keeps_form_id_when_present() {
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let mut values = valid_seller_values();
        values.id = "7".into();

        let seller = binder.extract(&values, &config).unwrap();
        assert_eq!(seller.id(), Some(EntityId::new(7)));
    }

    #[test]
    fn seller_load_then_extract_round_trips() {
        let config = FormatConfig::default();
        let departments = sample_departments();
        let binder = SellerBinder::new(&departments);

        let birth_date = config.parse_date("15/03/1990").unwrap();
        let original = Seller::new("Bob", "bob@x.com", birth_date, 1200.5, EntityId::new(1))
            .assigned(EntityId::new(4));

        let values = SellerBinder::load(&original, &config);
        assert_eq!(values.birth_date, "15/03/1990");
        assert_eq!(values.base_salary, "1200.50");

        let extracted = binder.extract(&values, &config).unwrap();
        assert_eq!(extracted, original);
    }
}
