//! Seller form service - drives the seller edit form.
//!
//! Needs two gateways: sellers for persistence, departments for the
//! reference-selection candidate list. The candidate list is fetched fresh
//! for each load/save so a selection is always validated against what
//! storage currently holds.

use tracing::{info, instrument};

use crate::{
    application::{
        error::FormError,
        notifier::{ChangeNotifier, DataChangeListener},
        ports::{DepartmentGateway, SellerGateway},
    },
    domain::{Department, FormatConfig, Seller, SellerBinder, SellerFieldValues},
    error::SalesdeskResult,
};

/// Drives one seller form: load, validate against candidates, save, notify.
pub struct SellerFormService {
    sellers: Box<dyn SellerGateway>,
    departments: Box<dyn DepartmentGateway>,
    entity: Option<Seller>,
    notifier: ChangeNotifier,
}

impl SellerFormService {
    /// Create a new form service with the given gateways.
    pub fn new(sellers: Box<dyn SellerGateway>, departments: Box<dyn DepartmentGateway>) -> Self {
        Self {
            sellers,
            departments,
            entity: None,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Install the record under edit.
    pub fn set_entity(&mut self, entity: Seller) {
        self.entity = Some(entity);
    }

    /// The record currently under edit, if any.
    pub fn entity(&self) -> Option<&Seller> {
        self.entity.as_ref()
    }

    /// Subscribe a listener to successful saves.
    pub fn subscribe(&mut self, listener: impl DataChangeListener + 'static) {
        self.notifier.subscribe(listener);
    }

    /// The department candidates the form may select from.
    pub fn department_options(&self) -> SalesdeskResult<Vec<Department>> {
        let departments = self
            .departments
            .find_all()
            .map_err(FormError::Persistence)?;
        Ok(departments)
    }

    /// Format the in-edit entity for display.
    pub fn field_values(&self, config: &FormatConfig) -> SalesdeskResult<SellerFieldValues> {
        let entity = self
            .entity
            .as_ref()
            .ok_or(FormError::EntityNotSet { form: "seller" })?;
        Ok(SellerBinder::load(entity, config))
    }

    /// Extract against the current candidate list, persist, and notify.
    ///
    /// On validation failure nothing is persisted, no listener fires, and
    /// the in-edit entity is unchanged; same on persistence failure. Only
    /// after the gateway accepts the record do the listeners run, in
    /// subscription order.
    #[instrument(skip_all)]
    pub fn save(
        &mut self,
        values: &SellerFieldValues,
        config: &FormatConfig,
    ) -> SalesdeskResult<Seller> {
        let candidates = self
            .departments
            .find_all()
            .map_err(FormError::Persistence)?;
        let binder = SellerBinder::new(&candidates);
        let entity = binder
            .extract(values, config)
            .map_err(FormError::Validation)?;

        let stored = self
            .sellers
            .save_or_update(entity)
            .map_err(FormError::Persistence)?;
        info!(id = %stored.id().map(|i| i.get()).unwrap_or_default(), "seller saved");

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
