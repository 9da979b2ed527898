pub mod constants;
pub mod countries;
pub mod progress;

pub use constants::*;
pub use countries::country_name;
pub use progress::ProgressReporter;
