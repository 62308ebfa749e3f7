//! Projection of transactions into table rows.

use crate::store::customer_name;
use crate::{format_amount, Customer, CustomerId, Result, Transaction};
use serde::{Deserialize, Serialize};

/// One rendered table row.
///
/// `customer_id` and `row` are attached to the row markup so a click can be
/// resolved without looking anything up by position in the source list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Position within the current rendering
    pub row: usize,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub date: String,
    pub amount: f64,
}

impl DisplayRow {
    pub fn amount_text(&self) -> String {
        format_amount(self.amount)
    }

    pub fn selection(&self) -> RowSelection {
        RowSelection {
            row: self.row,
            customer_id: self.customer_id,
        }
    }
}

/// What a click on a rendered row resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSelection {
    pub row: usize,
    pub customer_id: CustomerId,
}

impl RowSelection {
    pub const ROW_ATTR: &'static str = "data-row";
    pub const CUSTOMER_ATTR: &'static str = "data-customer-id";

    /// Rebuild a selection from the tag attributes found on a row element
    pub fn from_attributes(row: Option<&str>, customer_id: Option<&str>) -> Option<Self> {
        let row = row?.trim().parse::<usize>().ok()?;
        let customer_id = customer_id?.parse::<CustomerId>().ok()?;
        Some(Self { row, customer_id })
    }
}

/// Join each transaction with its customer's name, preserving order 1:1
pub fn render_rows(transactions: &[Transaction], customers: &[Customer]) -> Result<Vec<DisplayRow>> {
    transactions
        .iter()
        .enumerate()
        .map(|(row, transaction)| {
            Ok(DisplayRow {
                row,
                customer_id: transaction.customer_id,
                customer_name: customer_name(customers, transaction.customer_id)?.to_string(),
                date: transaction.date.clone(),
                amount: transaction.amount,
            })
        })
        .collect()
}
