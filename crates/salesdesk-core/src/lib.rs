//! Salesdesk Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Salesdesk
//! records manager: a GUI-toolkit-agnostic form layer for editing Seller
//! and Department records, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        salesdesk-cli (front-end)        │
//! │      (collects raw field values)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Form Services                  │
//! │ (DepartmentFormService, SellerForm...)  │
//! │   load / save / notify orchestration    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Gateway Ports (Traits)             │
//! │  (DepartmentGateway, SellerGateway)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   salesdesk-adapters (Infrastructure)   │
//! │    (InMemory stores, JsonFileStore)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (Department, Seller, binders, rules)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use salesdesk_core::{
//!     application::DepartmentFormService,
//!     domain::{DepartmentFieldValues, FormatConfig},
//! };
//!
//! // 1. Build a form service (with an injected gateway adapter)
//! let mut form = DepartmentFormService::new(gateway);
//! form.subscribe(|| println!("records changed"));
//!
//! // 2. Collect raw field values from the surface and save
//! let values = DepartmentFieldValues { id: String::new(), name: "Sales".into() };
//! let saved = form.save(&values)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ChangeNotifier, DataChangeListener, DepartmentFormService, FormError, SellerFormService,
        ports::{DepartmentGateway, GatewayResult, PersistenceError, SellerGateway},
    };
    pub use crate::domain::{
        Department, DepartmentBinder, DepartmentFieldValues, EntityId, Field, FormatConfig,
        Seller, SellerBinder, SellerFieldValues, ValidationErrorSet,
    };
    pub use crate::error::{ErrorCategory, SalesdeskError, SalesdeskResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
