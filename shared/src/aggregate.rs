//! Per-date totals for a single customer, feeding the bar chart.

use crate::store::customer_name;
use crate::{Customer, CustomerId, Transaction};
use log::warn;

/// Date labels and their summed amounts for one customer.
///
/// `labels` and `totals` are parallel: `totals[i]` is the sum of every
/// transaction dated `labels[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub customer_id: CustomerId,
    pub customer_name: String,
    /// False when the name is the fallback label because the id is unknown
    pub name_resolved: bool,
    pub labels: Vec<String>,
    pub totals: Vec<f64>,
}

impl CustomerSummary {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn grand_total(&self) -> f64 {
        self.totals.iter().sum()
    }
}

/// Group `customer_id`'s transactions by date label and sum each group.
///
/// Labels keep their first-occurrence order. An unknown id is reported on the
/// log channel and displayed as `unknown_label`.
pub fn aggregate(
    transactions: &[Transaction],
    customers: &[Customer],
    customer_id: CustomerId,
    unknown_label: &str,
) -> CustomerSummary {
    let mut labels: Vec<String> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.customer_id == customer_id) {
        match labels.iter().position(|label| *label == transaction.date) {
            Some(index) => totals[index] += transaction.amount,
            None => {
                labels.push(transaction.date.clone());
                totals.push(transaction.amount);
            }
        }
    }

    let (customer_name, name_resolved) = match customer_name(customers, customer_id) {
        Ok(name) => (name.to_string(), true),
        Err(e) => {
            warn!("{}; charting as \"{}\"", e, unknown_label);
            (unknown_label.to_string(), false)
        }
    };

    CustomerSummary {
        customer_id,
        customer_name,
        name_resolved,
        labels,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alice_and_bob, customer, tx};

    const UNKNOWN: &str = "Undefined User";

    #[test]
    fn test_same_day_amounts_are_summed() {
        let data = alice_and_bob();
        let summary = aggregate(&data.transactions, &data.customers, CustomerId(1), UNKNOWN);

        assert_eq!(summary.customer_name, "Alice");
        assert!(summary.name_resolved);
        assert_eq!(summary.labels, vec!["2024-01-01"]);
        assert_eq!(summary.totals, vec![15.0]);
    }

    #[test]
    fn test_labels_keep_first_occurrence_order() {
        let customers = vec![customer(3, "Cleo")];
        let transactions = vec![
            tx(3, "2024-03-05", 1.0),
            tx(3, "2024-01-01", 2.0),
            tx(4, "2024-02-02", 100.0),
            tx(3, "2024-03-05", 4.0),
            tx(3, "2023-12-31", 8.0),
        ];

        let summary = aggregate(&transactions, &customers, CustomerId(3), UNKNOWN);
        assert_eq!(summary.labels, vec!["2024-03-05", "2024-01-01", "2023-12-31"]);
        assert_eq!(summary.totals, vec![5.0, 2.0, 8.0]);
    }

    #[test]
    fn test_totals_sum_to_customer_amounts() {
        let customers = vec![customer(1, "A"), customer(2, "B")];
        let transactions = vec![
            tx(1, "x", 1.5),
            tx(2, "x", 9.0),
            tx(1, "y", 2.25),
            tx(1, "x", 3.0),
            tx(2, "z", 4.0),
        ];

        for id in [1, 2] {
            let summary = aggregate(&transactions, &customers, CustomerId(id), UNKNOWN);
            let expected: f64 = transactions
                .iter()
                .filter(|t| t.customer_id == CustomerId(id))
                .map(|t| t.amount)
                .sum();
            assert!((summary.grand_total() - expected).abs() < 1e-9);
            assert_eq!(summary.labels.len(), summary.totals.len());
        }
    }

    #[test]
    fn test_customer_without_transactions_yields_empty_series() {
        let customers = vec![customer(1, "A"), customer(2, "Quiet")];
        let transactions = vec![tx(1, "x", 1.0)];

        let summary = aggregate(&transactions, &customers, CustomerId(2), UNKNOWN);
        assert!(summary.is_empty());
        assert!(summary.totals.is_empty());
        assert_eq!(summary.customer_name, "Quiet");
    }

    #[test]
    fn test_unknown_customer_falls_back_to_placeholder_name() {
        let customers = vec![customer(1, "A")];
        let transactions = vec![tx(9, "x", 2.0), tx(9, "x", 3.0)];

        let summary = aggregate(&transactions, &customers, CustomerId(9), UNKNOWN);
        assert_eq!(summary.customer_name, UNKNOWN);
        assert!(!summary.name_resolved);
        assert_eq!(summary.totals, vec![5.0]);
    }
}
