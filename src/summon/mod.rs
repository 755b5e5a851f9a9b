//! Summon (gacha): crystal-priced draws from the roster pool.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
