//! Item system: slots, catalog, equipment, and inventory.

pub mod catalog;
pub mod equipment;
pub mod types;

pub use catalog::*;
pub use equipment::*;
pub use types::*;
