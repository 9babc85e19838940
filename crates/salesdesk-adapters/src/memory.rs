//! Thread-safe in-memory record stores.
//!
//! The reference stores for tests and demos: a `BTreeMap` behind an
//! `Arc<RwLock>` with a monotonically increasing id counter. Inserts assign
//! the next id; updates replace by id and refuse ids that were never
//! assigned.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use salesdesk_core::application::ports::{
    DepartmentGateway, GatewayResult, PersistenceError, SellerGateway,
};
use salesdesk_core::domain::{Department, EntityId, Seller};

/// What a store needs from a record: read the id, stamp an id.
trait StoredRecord: Clone {
    const KIND: &'static str;

    fn record_id(&self) -> Option<EntityId>;
    fn stamped(self, id: EntityId) -> Self;
}

impl StoredRecord for Department {
    const KIND: &'static str = "department";

    fn record_id(&self) -> Option<EntityId> {
        self.id()
    }

    fn stamped(self, id: EntityId) -> Self {
        self.assigned(id)
    }
}

impl StoredRecord for Seller {
    const KIND: &'static str = "seller";

    fn record_id(&self) -> Option<EntityId> {
        self.id()
    }

    fn stamped(self, id: EntityId) -> Self {
        self.assigned(id)
    }
}

/// Records plus the id counter, shared by both stores.
struct StoreState<T> {
    records: BTreeMap<EntityId, T>,
    next_id: u32,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: StoredRecord> StoreState<T> {
    fn save_or_update(&mut self, record: T) -> GatewayResult<T> {
        match record.record_id() {
            Some(id) => {
                if !self.records.contains_key(&id) {
                    return Err(PersistenceError::new(format!(
                        "no {} with id {id}",
                        T::KIND
                    )));
                }
                self.records.insert(id, record.clone());
                Ok(record)
            }
            None => {
                let id = EntityId::new(self.next_id);
                self.next_id += 1;
                let stored = record.stamped(id);
                self.records.insert(id, stored.clone());
                Ok(stored)
            }
        }
    }

    fn all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }
}

fn lock_poisoned() -> PersistenceError {
    PersistenceError::new("record store lock poisoned")
}

/// Thread-safe in-memory department store.
#[derive(Clone, Default)]
pub struct InMemoryDepartmentStore {
    inner: Arc<RwLock<StoreState<Department>>>,
}

impl InMemoryDepartmentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records (ids assigned in
    /// iteration order).
    pub fn seeded(records: impl IntoIterator<Item = Department>) -> GatewayResult<Self> {
        let store = Self::new();
        for record in records {
            store.save_or_update(record)?;
        }
        Ok(store)
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().map(|s| s.records.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DepartmentGateway for InMemoryDepartmentStore {
    fn save_or_update(&self, department: Department) -> GatewayResult<Department> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.save_or_update(department)
    }

    fn find_all(&self) -> GatewayResult<Vec<Department>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.all())
    }
}

/// Thread-safe in-memory seller store.
#[derive(Clone, Default)]
pub struct InMemorySellerStore {
    inner: Arc<RwLock<StoreState<Seller>>>,
}

impl InMemorySellerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().map(|s| s.records.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SellerGateway for InMemorySellerStore {
    fn save_or_update(&self, seller: Seller) -> GatewayResult<Seller> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;
        inner.save_or_update(seller)
    }

    fn find_all(&self) -> GatewayResult<Vec<Seller>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        Ok(inner.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = InMemoryDepartmentStore::new();
        let a = store.save_or_update(Department::new("Sales")).unwrap();
        let b = store.save_or_update(Department::new("HR")).unwrap();

        assert_eq!(a.id(), Some(EntityId::new(1)));
        assert_eq!(b.id(), Some(EntityId::new(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_replaces_by_id() {
        let store = InMemoryDepartmentStore::new();
        let stored = store.save_or_update(Department::new("Sales")).unwrap();

        let renamed = Department::with_id(stored.id().unwrap(), "Inside Sales");
        store.save_or_update(renamed.clone()).unwrap();

        let all = store.find_all().unwrap();
        assert_eq!(all, vec![renamed]);
    }

    #[test]
    fn update_of_unknown_id_is_refused() {
        let store = InMemoryDepartmentStore::new();
        let err = store
            .save_or_update(Department::with_id(EntityId::new(42), "Ghost"))
            .unwrap_err();
        assert!(err.message().contains("42"));
        assert!(store.is_empty());
    }

    #[test]
    fn find_all_returns_records_in_id_order() {
        let store = InMemoryDepartmentStore::seeded([
            Department::new("Sales"),
            Department::new("HR"),
            Department::new("Logistics"),
        ])
        .unwrap();

        let names: Vec<String> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["Sales", "HR", "Logistics"]);
    }

    #[test]
    fn seller_store_assigns_ids_independently() {
        use chrono::{TimeZone, Utc};

        let departments = InMemoryDepartmentStore::seeded([Department::new("Sales")]).unwrap();
        let department_id = departments.find_all().unwrap()[0].id().unwrap();

        let store = InMemorySellerStore::new();
        let birth = Utc.with_ymd_and_hms(1980, 1, 1, 0, 0, 0).unwrap();
        let stored = store
            .save_or_update(Seller::new("Alice", "alice@x.com", birth, 2500.0, department_id))
            .unwrap();

        assert_eq!(stored.id(), Some(EntityId::new(1)));
        assert_eq!(store.find_all().unwrap(), vec![stored]);
    }
}
