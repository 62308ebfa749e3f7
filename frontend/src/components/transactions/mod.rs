pub mod bar_chart;
pub mod table_surface;
pub mod transaction_table;

pub use bar_chart::CanvasChartLibrary;
pub use table_surface::DomSurface;
pub use transaction_table::TransactionTable;
