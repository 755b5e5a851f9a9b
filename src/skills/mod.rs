//! Skill gating, cooldowns, and unlock announcements.

pub mod cooldown;
pub mod logic;
pub mod types;
pub mod unlocks;

pub use cooldown::*;
pub use logic::*;
pub use types::*;
pub use unlocks::*;
