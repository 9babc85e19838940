//! Form binding: entity ⇄ raw field values, with validation.
//!
//! One binder per entity. `load` formats a typed entity into display
//! strings; `extract` parses display strings back into a typed entity or
//! fails with the complete [`ValidationErrorSet`]. Both take an explicit
//! [`FormatConfig`]; no global locale state.
//!
//! [`ValidationErrorSet`]: crate::domain::ValidationErrorSet

pub mod department;
pub mod field_values;
pub mod format;
pub mod seller;

pub use department::DepartmentBinder;
pub use field_values::{DepartmentFieldValues, SellerFieldValues};
pub use format::FormatConfig;
pub use seller::SellerBinder;
