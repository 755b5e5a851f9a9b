//! Experience and leveling.

use super::constants::EXP_GROWTH_PERCENT;
use crate::character::Character;

/// Level state before and after an experience grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub level_before: u32,
    pub level_after: u32,
}

impl LevelChange {
    pub fn levels_gained(&self) -> u32 {
        self.level_after - self.level_before
    }

    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// Exp requirement for the level after one with requirement `current`.
pub fn next_exp_requirement(current: u64) -> u64 {
    (current.saturating_mul(EXP_GROWTH_PERCENT) / 100).max(1)
}

/// Adds `amount` exp and processes every level-up it pays for.
///
/// There is no cap on levels gained in one call. `amount == 0` leaves the
/// character untouched.
pub fn apply_experience(character: &mut Character, amount: u64) -> LevelChange {
    let level_before = character.level;
    if amount == 0 {
        return LevelChange {
            level_before,
            level_after: level_before,
        };
    }

    character.exp = character.exp.saturating_add(amount);
    character.exp_to_next_level = character.exp_to_next_level.max(1);
    while character.exp >= character.exp_to_next_level {
        character.exp -= character.exp_to_next_level;
        character.level = character.level.saturating_add(1);
        character.exp_to_next_level = next_exp_requirement(character.exp_to_next_level);
    }

    if character.level > level_before {
        tracing::info!(
            character = %character.id,
            from = level_before,
            to = character.level,
            "character leveled up"
        );
    }

    LevelChange {
        level_before,
        level_after: character.level,
    }
}
