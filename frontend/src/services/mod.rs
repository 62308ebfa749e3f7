pub mod api;
pub mod logging;

pub use api::DataClient;
pub use logging::Logger;
