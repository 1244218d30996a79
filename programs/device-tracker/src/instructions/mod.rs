pub mod get_latest_location;
pub mod get_location_history;
pub mod record_location;
pub mod registry;

pub use get_latest_location::*;
pub use get_location_history::*;
pub use record_location::*;
