use crate::CustomerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The data provider's document did not have the expected shape
    #[error("Malformed dataset payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A transaction references a customer missing from the loaded dataset
    #[error("Data integrity error: no customer with id {customer_id}")]
    UnknownCustomer { customer_id: CustomerId },

    #[error("Chart error: {0}")]
    Chart(String),
}

impl DashboardError {
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, DashboardError::UnknownCustomer { .. })
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
