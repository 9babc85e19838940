//! Application layer for Salesdesk.
//!
//! This layer contains:
//! - **Services**: one per form (DepartmentFormService, SellerFormService)
//! - **Ports**: interface definitions (traits) for storage
//! - **Notifier**: the listener registry invoked after successful saves
//! - **Errors**: failures at the form boundary
//!
//! The application layer coordinates the domain layer but contains no
//! field-level rules itself. All validation lives in `crate::domain`.

pub mod error;
pub mod notifier;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{DepartmentFormService, SellerFormService};

// Re-export port traits (for adapter implementation)
pub use ports::{DepartmentGateway, GatewayResult, PersistenceError, SellerGateway};

pub use error::FormError;
pub use notifier::{ChangeNotifier, DataChangeListener};
