//! Content catalog: opponents, backgrounds, roster pool, and items.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
