//! Application services - drive the forms.
//!
//! One service per form. Each coordinates the domain binder and the
//! gateway ports to accomplish the form's use cases: load for display,
//! save with validation, listener notification.

pub mod department_form;
pub mod seller_form;

pub use department_form::DepartmentFormService;
pub use seller_form::SellerFormService;
