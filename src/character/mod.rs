//! Characters, equipment handling, and stat resolution.

pub mod derived_stats;
pub mod logic;
pub mod types;

pub use derived_stats::*;
pub use types::*;
