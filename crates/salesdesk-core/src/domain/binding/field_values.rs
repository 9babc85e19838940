//! Raw form field values, as taken from form controls before parsing.
//!
//! Everything is a string (or a selected option) on purpose: the binder is
//! the single place where parsing and validation happen, so whatever surface
//! collects the input (text fields, CLI flags) hands it over untyped.

use crate::domain::entities::EntityId;

/// Raw values of the department form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentFieldValues {
    pub id: String,
    pub name: String,
}

/// Raw values of the seller form.
///
/// `department` is the currently selected option, by id; the candidate list
/// it indexes into is supplied to the binder separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerFieldValues {
    pub id: String,
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub base_salary: String,
    pub department: Option<EntityId>,
}
