//! Gacha Engine - character progression and combat resolution.
//!
//! The library holds every game rule; the binary is a thin headless driver.

pub mod character;
pub mod config;
pub mod content;
pub mod core;
pub mod economy;
pub mod encounter;
pub mod error;
pub mod items;
pub mod persistence;
pub mod skills;
pub mod summon;
