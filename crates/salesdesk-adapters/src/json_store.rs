//! JSON-file-backed record store.
//!
//! One document on disk holds both record collections and their id
//! counters. The file is read once at open and rewritten after every
//! accepted save; the dataset is a handful of form records, not something
//! that warrants a database.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use salesdesk_core::application::ports::{
    DepartmentGateway, GatewayResult, PersistenceError, SellerGateway,
};
use salesdesk_core::domain::{Department, EntityId, Seller};

fn first_id() -> u32 {
    1
}

/// The on-disk document.
#[derive(Debug, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    departments: Vec<Department>,
    #[serde(default)]
    sellers: Vec<Seller>,
    #[serde(default = "first_id")]
    next_department_id: u32,
    #[serde(default = "first_id")]
    next_seller_id: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            departments: Vec::new(),
            sellers: Vec::new(),
            next_department_id: first_id(),
            next_seller_id: first_id(),
        }
    }
}

/// Both gateways, backed by a single JSON file.
///
/// Clones share the same underlying document, so one store can be handed to
/// a department form and a seller form at the same time.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: Arc<RwLock<Document>>,
}

impl JsonFileStore {
    /// Open a store at `path`, reading the document if the file exists and
    /// starting empty otherwise.
    pub fn open(path: impl Into<PathBuf>) -> GatewayResult<Self> {
        let path = path.into();
        let document = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                PersistenceError::new(format!("cannot read {}: {e}", path.display()))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                PersistenceError::new(format!("malformed store {}: {e}", path.display()))
            })?
        } else {
            Document::default()
        };
        debug!(path = %path.display(), "record store opened");

        Ok(Self {
            path,
            state: Arc::new(RwLock::new(document)),
        })
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, document: &Document) -> GatewayResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    PersistenceError::new(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(document)
            .map_err(|e| PersistenceError::new(format!("cannot encode store: {e}")))?;
        fs::write(&self.path, raw).map_err(|e| {
            PersistenceError::new(format!("cannot write {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "record store written");
        Ok(())
    }
}

fn lock_poisoned() -> PersistenceError {
    PersistenceError::new("record store lock poisoned")
}

impl DepartmentGateway for JsonFileStore {
    fn save_or_update(&self, department: Department) -> GatewayResult<Department> {
        let mut doc = self.state.write().map_err(|_| lock_poisoned())?;

        let stored = match department.id() {
            Some(id) => {
                let slot = doc
                    .departments
                    .iter_mut()
                    .find(|d| d.id() == Some(id))
                    .ok_or_else(|| {
                        PersistenceError::new(format!("no department with id {id}"))
                    })?;
                *slot = department.clone();
                department
            }
            None => {
                let id = EntityId::new(doc.next_department_id);
                doc.next_department_id += 1;
                let stored = department.assigned(id);
                doc.departments.push(stored.clone());
                stored
            }
        };

        self.persist(&doc)?;
        Ok(stored)
    }

    fn find_all(&self) -> GatewayResult<Vec<Department>> {
        let doc = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(doc.departments.clone())
    }
}

impl SellerGateway for JsonFileStore {
    fn save_or_update(&self, seller: Seller) -> GatewayResult<Seller> {
        let mut doc = self.state.write().map_err(|_| lock_poisoned())?;

        let stored = match seller.id() {
            Some(id) => {
                let slot = doc
                    .sellers
                    .iter_mut()
                    .find(|s| s.id() == Some(id))
                    .ok_or_else(|| PersistenceError::new(format!("no seller with id {id}")))?;
                *slot = seller.clone();
                seller
            }
            None => {
                let id = EntityId::new(doc.next_seller_id);
                doc.next_seller_id += 1;
                let stored = seller.assigned(id);
                doc.sellers.push(stored.clone());
                stored
            }
        };

        self.persist(&doc)?;
        Ok(stored)
    }

    fn find_all(&self) -> GatewayResult<Vec<Seller>> {
        let doc = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(doc.sellers.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("records.json")).unwrap()
    }

    #[test]
    fn records_survive_reopen() {
        let dir = TempDir::new().unwrap();

        let store = store_in(&dir);
        let sales = DepartmentGateway::save_or_update(&store, Department::new("Sales")).unwrap();
        let birth = Utc.with_ymd_and_hms(1980, 1, 1, 0, 0, 0).unwrap();
        SellerGateway::save_or_update(
            &store,
            Seller::new("Alice", "alice@x.com", birth, 2500.0, sales.id().unwrap()),
        )
        .unwrap();

        let reopened = store_in(&dir);
        let departments = DepartmentGateway::find_all(&reopened).unwrap();
        let sellers = SellerGateway::find_all(&reopened).unwrap();

        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].name(), "Sales");
        assert_eq!(sellers.len(), 1);
        assert_eq!(sellers[0].name(), "Alice");
        assert_eq!(sellers[0].department_id(), sales.id().unwrap());
    }

    #[test]
    fn id_counter_survives_reopen() {
        let dir = TempDir::new().unwrap();

        let store = store_in(&dir);
        DepartmentGateway::save_or_update(&store, Department::new("Sales")).unwrap();

        let reopened = store_in(&dir);
        let hr = DepartmentGateway::save_or_update(&reopened, Department::new("HR")).unwrap();
        assert_eq!(hr.id(), Some(EntityId::new(2)));
    }

    #[test]
    fn update_rewrites_the_record_in_place() {
        let dir = TempDir::new().unwrap();

        let store = store_in(&dir);
        let stored = DepartmentGateway::save_or_update(&store, Department::new("Sales")).unwrap();
        let renamed = Department::with_id(stored.id().unwrap(), "Inside Sales");
        DepartmentGateway::save_or_update(&store, renamed.clone()).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(DepartmentGateway::find_all(&reopened).unwrap(), vec![renamed]);
    }

    #[test]
    fn updating_a_missing_record_is_refused() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err =
            DepartmentGateway::save_or_update(&store, Department::with_id(EntityId::new(9), "X"))
                .unwrap_err();
        assert!(err.message().contains("no department with id 9"));
    }

    #[test]
    fn malformed_file_is_a_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(path).unwrap_err();
        assert!(err.message().contains("malformed store"));
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(DepartmentGateway::find_all(&store).unwrap().is_empty());
        assert!(SellerGateway::find_all(&store).unwrap().is_empty());
    }
}
