//! Name/amount substring filtering of the transaction list.

use crate::store::customer_name;
use crate::{Customer, Result, Transaction};

/// The two text queries typed into the filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub name: String,
    pub amount: String,
}

impl FilterQuery {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// Keep the transactions whose customer name contains `query.name` and whose
/// amount text contains `query.amount`, both case-insensitively.
///
/// Input order is preserved. A transaction pointing at an unknown customer
/// fails the whole call instead of being filtered out.
pub fn filter_transactions(
    transactions: &[Transaction],
    customers: &[Customer],
    query: &FilterQuery,
) -> Result<Vec<Transaction>> {
    let name_query = query.name.to_lowercase();
    let amount_query = query.amount.to_lowercase();

    let mut matching = Vec::new();
    for transaction in transactions {
        let name = customer_name(customers, transaction.customer_id)?.to_lowercase();
        let amount = transaction.amount_text().to_lowercase();

        if name.contains(&name_query) && amount.contains(&amount_query) {
            matching.push(transaction.clone());
        }
    }
    Ok(matching)
}
