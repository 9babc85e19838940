//! Integration tests for salesdesk-core.
//!
//! Drive the form services against mocked gateways: the save workflow, the
//! listener contract, and the failure paths the form boundary must absorb.

use std::cell::RefCell;
use std::rc::Rc;

use mockall::mock;
use mockall::predicate::function;

use salesdesk_core::application::{DepartmentFormService, FormError, SellerFormService};
use salesdesk_core::application::ports::{
    DepartmentGateway, GatewayResult, PersistenceError, SellerGateway,
};
use salesdesk_core::domain::{
    Department, DepartmentFieldValues, EntityId, Field, FormatConfig, MSG_EMPTY, Seller,
    SellerFieldValues,
};
use salesdesk_core::error::SalesdeskError;

mock! {
    pub Departments {}
    impl DepartmentGateway for Departments {
        fn save_or_update(&self, department: Department) -> GatewayResult<Department>;
        fn find_all(&self) -> GatewayResult<Vec<Department>>;
    }
}

mock! {
    pub Sellers {}
    impl SellerGateway for Sellers {
        fn save_or_update(&self, seller: Seller) -> GatewayResult<Seller>;
        fn find_all(&self) -> GatewayResult<Vec<Seller>>;
    }
}

fn candidates() -> Vec<Department> {
    vec![
        Department::with_id(EntityId::new(1), "Sales"),
        Department::with_id(EntityId::new(2), "HR"),
    ]
}

fn alice_values() -> SellerFieldValues {
    SellerFieldValues {
        id: "7".into(),
        name: "Alice".into(),
        email: "alice@x.com".into(),
        birth_date: "01/01/1980".into(),
        base_salary: "2500.00".into(),
        department: Some(EntityId::new(2)),
    }
}

// ── save workflow ─────────────────────────────────────────────────────────────

#[test]
fn valid_seller_save_persists_once_and_notifies_in_order() {
    let mut sellers = MockSellers::new();
    sellers
        .expect_save_or_update()
        .withf(|s: &Seller| s.id() == Some(EntityId::new(7)) && s.name() == "Alice")
        .times(1)
        .returning(|s| Ok(s));

    let mut departments = MockDepartments::new();
    departments.expect_find_all().returning(|| Ok(candidates()));

    let mut form = SellerFormService::new(Box::new(sellers), Box::new(departments));

    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["refresh-table", "close-window"] {
        let order = Rc::clone(&order);
        form.subscribe(move || order.borrow_mut().push(tag));
    }

    let config = FormatConfig::default();
    let stored = form.save(&alice_values(), &config).unwrap();

    assert_eq!(stored.id(), Some(EntityId::new(7)));
    assert_eq!(form.entity(), Some(&stored));
    assert_eq!(*order.borrow(), vec!["refresh-table", "close-window"]);
}

#[test]
fn validation_failure_skips_gateway_and_listeners() {
    let mut sellers = MockSellers::new();
    sellers.expect_save_or_update().times(0);
    let mut departments = MockDepartments::new();
    departments.expect_find_all().returning(|| Ok(candidates()));

    let mut form = SellerFormService::new(Box::new(sellers), Box::new(departments));

    let notified = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&notified);
    form.subscribe(move || *flag.borrow_mut() = true);

    let mut values = alice_values();
    values.name = String::new();

    let err = form.save(&values, &FormatConfig::default()).unwrap_err();
    let errors = err.validation_errors().expect("validation failure");
    assert_eq!(errors.get(Field::Name), Some(MSG_EMPTY));
    assert!(!*notified.borrow());
    assert_eq!(form.entity(), None);
}

#[test]
fn persistence_failure_leaves_entity_unchanged_and_silent() {
    let mut sellers = MockSellers::new();
    sellers
        .expect_save_or_update()
        .times(1)
        .returning(|_| Err(PersistenceError::new("disk full")));
    let mut departments = MockDepartments::new();
    departments.expect_find_all().returning(|| Ok(candidates()));

    let mut form = SellerFormService::new(Box::new(sellers), Box::new(departments));

    let config = FormatConfig::default();
    let original = Seller::new(
        "Alice",
        "alice@x.com",
        config.parse_date("01/01/1980").unwrap(),
        2500.0,
        EntityId::new(2),
    )
    .assigned(EntityId::new(7));
    form.set_entity(original.clone());

    let notified = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&notified);
    form.subscribe(move || *counter.borrow_mut() += 1);

    let err = form.save(&alice_values(), &config).unwrap_err();
    match err {
        SalesdeskError::Form(FormError::Persistence(e)) => {
            assert_eq!(e.message(), "disk full");
        }
        other => panic!("expected persistence failure, got {other:?}"),
    }
    assert_eq!(*notified.borrow(), 0);
    assert_eq!(form.entity(), Some(&original));
}

#[test]
fn department_save_round_trips_through_gateway() {
    let mut gateway = MockDepartments::new();
    gateway
        .expect_save_or_update()
        .with(function(|d: &Department| {
            d.id().is_none() && d.name() == "Logistics"
        }))
        .times(1)
        .returning(|d| Ok(d.assigned(EntityId::new(3))));

    let mut form = DepartmentFormService::new(Box::new(gateway));
    let values = DepartmentFieldValues {
        id: String::new(),
        name: "Logistics".into(),
    };

    let stored = form.save(&values).unwrap();
    assert_eq!(stored.id(), Some(EntityId::new(3)));
    assert_eq!(form.entity(), Some(&stored));
}

// ── form contract ─────────────────────────────────────────────────────────────

#[test]
fn loading_fields_without_entity_is_a_contract_error() {
    let gateway = MockDepartments::new();
    let form = DepartmentFormService::new(Box::new(gateway));

    let err = form.field_values(&FormatConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        SalesdeskError::Form(FormError::EntityNotSet { form: "department" })
    ));
}

#[test]
fn loaded_fields_match_installed_entity() {
    let gateway = MockDepartments::new();
    let mut form = DepartmentFormService::new(Box::new(gateway));
    form.set_entity(Department::with_id(EntityId::new(9), "Sales"));

    let values = form.field_values(&FormatConfig::default()).unwrap();
    assert_eq!(values.id, "9");
    assert_eq!(values.name, "Sales");
}

#[test]
fn cancel_discards_the_in_edit_entity() {
    let gateway = MockDepartments::new();
    let mut form = DepartmentFormService::new(Box::new(gateway));
    form.set_entity(Department::new("Sales"));
    form.cancel();
    assert_eq!(form.entity(), None);
}

#[test]
fn department_options_come_from_the_gateway() {
    let sellers = MockSellers::new();
    let mut departments = MockDepartments::new();
    departments.expect_find_all().returning(|| Ok(candidates()));

    let form = SellerFormService::new(Box::new(sellers), Box::new(departments));
    let options = form.department_options().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].name(), "Sales");
}

#[test]
fn gateway_failure_while_listing_candidates_surfaces_as_persistence() {
    let sellers = MockSellers::new();
    let mut departments = MockDepartments::new();
    departments
        .expect_find_all()
        .returning(|| Err(PersistenceError::new("store unavailable")));

    let form = SellerFormService::new(Box::new(sellers), Box::new(departments));
    let err = form.department_options().unwrap_err();
    assert!(matches!(
        err,
        SalesdeskError::Form(FormError::Persistence(_))
    ));
}
