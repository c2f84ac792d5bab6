//! The record store port.
//!
//! Every entity is persisted as one flat JSON object under a [`RecordKey`].
//! The model only ever talks to a [`RecordStore`]; which one is chosen by the
//! caller:
//!
//! * [`JsonFileStore`]: one file per record in a directory.
//! * [`InMemoryStore`]: a map, used by the tests.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RecordKind, StoreError};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// Identifies exactly one persisted record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKey {
    Customer(String),
    Hotel(String),
    Reservation(String),
}

impl RecordKey {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordKey::Customer(_) => RecordKind::Customer,
            RecordKey::Hotel(_) => RecordKind::Hotel,
            RecordKey::Reservation(_) => RecordKind::Reservation,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RecordKey::Customer(id) | RecordKey::Hotel(id) | RecordKey::Reservation(id) => id,
        }
    }

    /// The file name the record lives under.
    pub fn file_name(&self) -> String {
        match self {
            RecordKey::Customer(id) => format!("customer_{id}.json"),
            RecordKey::Hotel(name) => format!("{name}_data.json"),
            RecordKey::Reservation(id) => format!("reservation_{id}.json"),
        }
    }
}

/// Key to record storage. Implemented by the adapters in this module.
pub trait RecordStore {
    /// Returns the record stored under `key`, `None` when there is none.
    fn get(&self, key: &RecordKey) -> Result<Option<Value>, StoreError>;

    /// Stores `record` under `key`, replacing any previous record.
    fn put(&self, key: &RecordKey, record: &Value) -> Result<(), StoreError>;

    /// Removes the record under `key`. Returns `false` if there was none.
    fn delete(&self, key: &RecordKey) -> Result<bool, StoreError>;

    fn contains(&self, key: &RecordKey) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Typed access on top of any [`RecordStore`].
pub trait RecordStoreExt: RecordStore {
    fn load<T: DeserializeOwned>(&self, key: &RecordKey) -> Result<Option<T>, StoreError> {
        self.get(key)?
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)
    }

    fn save<T: Serialize>(&self, key: &RecordKey, record: &T) -> Result<(), StoreError> {
        let value: Value = serde_json::to_value(record)?;
        self.put(key, &value)
    }
}

impl<S: RecordStore + ?Sized> RecordStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        id: String,
        count: u32,
    }

    #[test]
    fn file_names_follow_the_record_kind() {
        assert_eq!(RecordKey::Customer("cust1".into()).file_name(), "customer_cust1.json");
        assert_eq!(RecordKey::Hotel("Test Hotel".into()).file_name(), "Test Hotel_data.json");
        assert_eq!(RecordKey::Reservation("r1".into()).file_name(), "reservation_r1.json");
    }

    #[test]
    fn typed_load_after_save() {
        let store = InMemoryStore::new();
        let key = RecordKey::Customer("p1".into());
        let probe = Probe { id: "p1".into(), count: 3 };

        store.save(&key, &probe).unwrap();

        assert_eq!(store.load::<Probe>(&key).unwrap(), Some(probe));
        assert!(store.contains(&key).unwrap());
    }

    #[test]
    fn typed_load_of_a_malformed_record_fails() {
        let store = InMemoryStore::new();
        let key = RecordKey::Customer("p2".into());
        store.put(&key, &serde_json::json!({ "id": 7 })).unwrap();

        assert!(matches!(
            store.load::<Probe>(&key),
            Err(StoreError::Serialization(_))
        ));
    }
}
