use std::cell::RefCell;
use std::collections::BTreeMap;

use serde_json::Value;

use super::{RecordKey, RecordStore};
use crate::error::StoreError;

/// Keeps every record in a map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RefCell<BTreeMap<RecordKey, Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Every key currently stored, in key order.
    pub fn keys(&self) -> Vec<RecordKey> {
        self.records.borrow().keys().cloned().collect()
    }
}

impl RecordStore for InMemoryStore {
    fn get(&self, key: &RecordKey) -> Result<Option<Value>, StoreError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn put(&self, key: &RecordKey, record: &Value) -> Result<(), StoreError> {
        self.records.borrow_mut().insert(key.clone(), record.clone());
        Ok(())
    }

    fn delete(&self, key: &RecordKey) -> Result<bool, StoreError> {
        Ok(self.records.borrow_mut().remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_replaces_the_previous_record() {
        let store = InMemoryStore::new();
        let key = RecordKey::Hotel("Inn".into());

        store.put(&key, &json!({ "name": "Inn", "location": "A" })).unwrap();
        store.put(&key, &json!({ "name": "Inn", "location": "B" })).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key).unwrap().unwrap()["location"], "B");
    }

    #[test]
    fn delete_reports_whether_something_was_removed() {
        let store = InMemoryStore::new();
        let key = RecordKey::Reservation("r1".into());
        store.put(&key, &json!({})).unwrap();

        assert!(store.delete(&key).unwrap());
        assert!(!store.delete(&key).unwrap());
        assert!(store.is_empty());
    }
}
