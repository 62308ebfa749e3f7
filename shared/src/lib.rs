//! Shared domain logic for the customer transactions dashboard.
//!
//! Everything in this crate is UI agnostic: the web frontend plugs its DOM
//! and canvas implementations into the [`PresentationSurface`] and
//! [`ChartLibrary`] traits, which lets the filtering, aggregation and
//! selection flow run (and be tested) without a browser.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod error;
pub mod filter;
pub mod session;
pub mod store;
pub mod table;

pub use aggregate::{aggregate, CustomerSummary};
pub use chart::{BarChartConfig, ChartController, ChartHandle, ChartLibrary};
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use filter::{filter_transactions, FilterQuery};
pub use session::{DashboardSession, LoadStatus, PresentationSurface};
pub use store::DataStore;
pub use table::{render_rows, DisplayRow, RowSelection};

/// Identifier of a customer, unique within a loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(CustomerId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    /// Display name shown in the table and the chart legend
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Customer this transaction is attributed to
    pub customer_id: CustomerId,
    /// Calendar day label, kept as an opaque string (never parsed as a time)
    pub date: String,
    pub amount: f64,
}

impl Transaction {
    /// Decimal string form of the amount, as matched by the amount filter.
    ///
    /// Integral amounts print without a fractional part (`10`, not `10.0`).
    pub fn amount_text(&self) -> String {
        format_amount(self.amount)
    }
}

/// Shape of the JSON document served by the data provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetPayload {
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
}

impl DatasetPayload {
    /// Parse the provider document. Only the shape is checked.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Format a number the way the dashboard displays and filters amounts.
///
/// Shortest round-trip digits. Magnitudes below `1e-6` or from `1e21` up use
/// exponent form with an explicit sign (`1e+21`, `1.5e-7`), as browsers
/// print numbers.
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if !(1e-6..1e21).contains(&magnitude) && !amount.is_nan() {
        let exponent_form = format!("{:e}", amount);
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponent_form,
        };
    }
    format!("{}", amount)
}
