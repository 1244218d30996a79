pub mod device;
pub mod events;
pub mod history;
pub mod location;

pub use device::*;
pub use events::*;
pub use history::*;
pub use location::*;
