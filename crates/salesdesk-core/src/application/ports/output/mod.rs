//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the form layer needs from storage. The
//! `salesdesk-adapters` crate provides implementations; the core never
//! inspects what sits behind them.

use thiserror::Error;

use crate::domain::{Department, Seller};

/// Opaque storage failure.
///
/// Gateways collapse whatever went wrong underneath (I/O, poisoned lock,
/// malformed file) into one message; the form layer surfaces it as a single
/// user-visible alert and aborts the save.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PersistenceError {
    message: String,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, PersistenceError>;

/// Port for department storage.
///
/// Implemented by:
/// - `salesdesk_adapters::memory::InMemoryDepartmentStore` (testing / demo)
/// - `salesdesk_adapters::json_store::JsonFileStore` (production)
pub trait DepartmentGateway: Send + Sync {
    /// Insert (id unset) or update (id set) a department.
    ///
    /// Returns the stored record; inserts come back with the assigned id.
    fn save_or_update(&self, department: Department) -> GatewayResult<Department>;

    /// Every stored department. Used to populate reference-selection
    /// candidates, e.g. the department list of a seller form.
    fn find_all(&self) -> GatewayResult<Vec<Department>>;
}

/// Port for seller storage.
pub trait SellerGateway: Send + Sync {
    /// Insert (id unset) or update (id set) a seller.
    ///
    /// Returns the stored record; inserts come back with the assigned id.
    fn save_or_update(&self, seller: Seller) -> GatewayResult<Seller>;

    /// Every stored seller.
    fn find_all(&self) -> GatewayResult<Vec<Seller>>;
}
