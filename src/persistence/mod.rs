//! Key-value persistence for profile data.
//!
//! Values are JSON strings. Gameplay treats storage as best-effort: failed
//! reads yield defaults and failed writes are logged, never propagated.

pub mod store;
pub mod versioned;

pub use store::*;
pub use versioned::*;
