pub mod dashboard;
pub mod filter_bar;
pub mod header;
pub mod transactions;

pub use dashboard::Dashboard;
