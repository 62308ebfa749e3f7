//! In-memory holder for the loaded customers and transactions.

use crate::{Customer, CustomerId, DashboardError, DatasetPayload, Result, Transaction};
use log::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    loaded: bool,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both lists with the payload's contents.
    ///
    /// The previous lists are dropped in one assignment; nothing is merged.
    pub fn load(&mut self, payload: DatasetPayload) -> (&[Customer], &[Transaction]) {
        debug!(
            "Loading dataset: {} customers, {} transactions",
            payload.customers.len(),
            payload.transactions.len()
        );
        *self = Self {
            customers: payload.customers,
            transactions: payload.transactions,
            loaded: true,
        };
        (&self.customers, &self.transactions)
    }

    /// Parse a provider document and load it. On a parse failure the store is untouched.
    pub fn load_json(&mut self, json: &str) -> Result<(&[Customer], &[Transaction])> {
        let payload = DatasetPayload::from_json(json)?;
        Ok(self.load(payload))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        find_customer(&self.customers, id)
    }

    pub fn customer_name(&self, id: CustomerId) -> Result<&str> {
        customer_name(&self.customers, id)
    }
}

pub(crate) fn find_customer(customers: &[Customer], id: CustomerId) -> Option<&Customer> {
    customers.iter().find(|customer| customer.id == id)
}

/// Resolve a customer's display name, failing on a dangling id
pub(crate) fn customer_name(customers: &[Customer], id: CustomerId) -> Result<&str> {
    find_customer(customers, id)
        .map(|customer| customer.name.as_str())
        .ok_or(DashboardError::UnknownCustomer { customer_id: id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alice_and_bob, customer, tx};

    #[test]
    fn test_new_store_is_empty_and_unloaded() {
        let store = DataStore::new();
        assert!(!store.is_loaded());
        assert!(store.customers().is_empty());
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_load_replaces_lists_wholesale() {
        let mut store = DataStore::new();
        store.load(alice_and_bob());
        assert_eq!(store.transactions().len(), 3);

        let (customers, transactions) = store.load(DatasetPayload {
            customers: vec![customer(9, "Zed")],
            transactions: vec![tx(9, "2024-02-02", 1.0)],
        });
        assert_eq!(customers.len(), 1);
        assert_eq!(transactions.len(), 1);
        assert!(store.customer(CustomerId(1)).is_none());
        assert_eq!(store.customer_name(CustomerId(9)).unwrap(), "Zed");
    }

    #[test]
    fn test_load_json_rejects_wrong_shape_and_keeps_previous_data() {
        let mut store = DataStore::new();
        store.load(alice_and_bob());

        let err = store.load_json(r#"{"customers": "nope"}"#).unwrap_err();
        assert!(matches!(err, DashboardError::MalformedPayload(_)));
        assert_eq!(store.transactions().len(), 3);
        assert_eq!(store.customer_name(CustomerId(2)).unwrap(), "Bob");
    }

    #[test]
    fn test_load_json_accepts_provider_document() {
        let mut store = DataStore::new();
        let (customers, transactions) = store
            .load_json(
                r#"{"customers":[{"id":1,"name":"Ahmed Ali"}],
                    "transactions":[{"customer_id":1,"date":"2022-01-01","amount":1000}]}"#,
            )
            .unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(transactions.len(), 1);
        assert!(store.is_loaded());
    }

    #[test]
    fn test_customer_name_reports_dangling_id() {
        let mut store = DataStore::new();
        store.load(alice_and_bob());

        let err = store.customer_name(CustomerId(77)).unwrap_err();
        assert!(err.is_data_integrity());
        assert_eq!(err.to_string(), "Data integrity error: no customer with id 77");
    }
}
