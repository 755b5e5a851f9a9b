//! Shared game math, progression rules, and the persisted profile.

pub mod combat_math;
pub mod constants;
pub mod game_state;
pub mod progression;

pub use combat_math::*;
pub use constants::*;
pub use game_state::*;
pub use progression::*;
