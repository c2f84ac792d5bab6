use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult, RecordKind};
use crate::store::{RecordKey, RecordStore, RecordStoreExt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Builds a customer without touching any store.
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::Customer(self.customer_id.clone())
    }

    /// Builds a customer and persists it, replacing any record with the same id.
    pub fn create<S: RecordStore + ?Sized>(
        store: &S,
        customer_id: &str,
        name: &str,
        email: &str,
    ) -> ModelResult<Self> {
        let customer = Self::new(customer_id, name, email);
        customer.save(store)?;
        Ok(customer)
    }

    pub fn load<S: RecordStore + ?Sized>(store: &S, customer_id: &str) -> ModelResult<Self> {
        let key = RecordKey::Customer(customer_id.to_string());
        store.load(&key)?.ok_or_else(|| ModelError::NotFound {
            kind: RecordKind::Customer,
            id: customer_id.to_string(),
        })
    }

    pub fn save<S: RecordStore + ?Sized>(&self, store: &S) -> ModelResult<()> {
        store.save(&self.key(), self)?;
        Ok(())
    }

    /// Partial update. `None` or an empty string keeps the current value.
    /// The record is rewritten either way.
    pub fn update_details<S: RecordStore + ?Sized>(
        &mut self,
        store: &S,
        name: Option<&str>,
        email: Option<&str>,
    ) -> ModelResult<()> {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            self.email = email.to_string();
        }
        self.save(store)
    }

    pub fn delete<S: RecordStore + ?Sized>(store: &S, customer_id: &str) -> ModelResult<()> {
        let key = RecordKey::Customer(customer_id.to_string());
        if store.delete(&key)? {
            Ok(())
        } else {
            Err(ModelError::NotFound {
                kind: RecordKind::Customer,
                id: customer_id.to_string(),
            })
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer ID: {}, Name: {}, Email: {}",
            self.customer_id, self.name, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn create_then_load_round_trips() {
        let store = InMemoryStore::new();
        let original = Customer::create(&store, "cust1003", "Bob Smith", "bob@example.com").unwrap();

        let loaded = Customer::load(&store, "cust1003").unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn delete_then_load_is_not_found() {
        let store = InMemoryStore::new();
        Customer::create(&store, "cust1001", "John Doe", "john@example.com").unwrap();

        Customer::delete(&store, "cust1001").unwrap();

        assert!(matches!(
            Customer::load(&store, "cust1001"),
            Err(ModelError::NotFound { kind: RecordKind::Customer, .. })
        ));
    }

    #[test]
    fn deleting_an_unknown_customer_fails() {
        let store = InMemoryStore::new();
        assert!(matches!(
            Customer::delete(&store, "ghost"),
            Err(ModelError::NotFound { .. })
        ));
    }

    #[test]
    fn update_details_is_partial_and_persisted() {
        let store = InMemoryStore::new();
        let mut customer = Customer::create(&store, "1", "John Doe", "johndoe@example.com").unwrap();

        customer.update_details(&store, Some("Jane Doe"), None).unwrap();
        customer.update_details(&store, Some(""), Some("janedoe@example.com")).unwrap();

        assert_eq!(customer.name, "Jane Doe");
        assert_eq!(customer.email, "janedoe@example.com");
        assert_eq!(Customer::load(&store, "1").unwrap(), customer);
    }

    #[test]
    fn display_lists_every_field() {
        let customer = Customer::new("cust1002", "Jane Doe", "jane@example.com");
        assert_eq!(
            customer.to_string(),
            "Customer ID: cust1002, Name: Jane Doe, Email: jane@example.com"
        );
    }
}
