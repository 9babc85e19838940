//! Department form service - drives the department edit form.
//!
//! One in-edit entity per instance. The gateway is injected at construction
//! (there is no "service not set" failure mode left to check at runtime);
//! only the in-edit entity can legitimately be absent, which surfaces as
//! [`FormError::EntityNotSet`].

use tracing::{info, instrument};

use crate::{
    application::{
        error::FormError,
        notifier::{ChangeNotifier, DataChangeListener},
        ports::DepartmentGateway,
    },
    domain::{Department, DepartmentBinder, DepartmentFieldValues, FormatConfig},
    error::SalesdeskResult,
};

/// Drives one department form: load, validate, save, notify.
pub struct DepartmentFormService {
    gateway: Box<dyn DepartmentGateway>,
    entity: Option<Department>,
    notifier: ChangeNotifier,
}

impl DepartmentFormService {
    /// Create a new form service with the given gateway.
    pub fn new(gateway: Box<dyn DepartmentGateway>) -> Self {
        Self {
            gateway,
            entity: None,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Install the record under edit.
    pub fn set_entity(&mut self, entity: Department) {
        self.entity = Some(entity);
    }

    /// The record currently under edit, if any.
    pub fn entity(&self) -> Option<&Department> {
        self.entity.as_ref()
    }

    /// Subscribe a listener to successful saves.
    pub fn subscribe(&mut self, listener: impl DataChangeListener + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Format the in-edit entity for display.
    pub fn field_values(&self, config: &FormatConfig) -> SalesdeskResult<DepartmentFieldValues> {
        let entity = self
            .entity
            .as_ref()
            .ok_or(FormError::EntityNotSet { form: "department" })?;
        Ok(DepartmentBinder::load(entity, config))
    }

    /// Extract, persist, and notify.
    ///
    /// On validation failure nothing is persisted, no listener fires, and
    /// the in-edit entity is unchanged; same on persistence failure. Only
    /// after the gateway accepts the record do the listeners run, in
    /// subscription order.
    #[instrument(skip_all)]
    pub fn save(&mut self, values: &DepartmentFieldValues) -> SalesdeskResult<Department> {
        let entity = DepartmentBinder::extract(values).map_err(FormError::Validation)?;

        let stored = self
            .gateway
            .save_or_update(entity)
            .map_err(FormError::Persistence)?;
        info!(id = %stored.id().map(|i| i.get()).unwrap_or_default(), "department saved");

        self.entity = Some(stored.clone());
        self.notifier.notify_all();
        Ok(stored)
    }

    /// Discard the in-edit entity. The windowing layer owns closing the
    /// form itself.
    pub fn cancel(&mut self) {
        self.entity = None;
    }
}
