//! Balance constants shared by every subsystem.
//!
//! Change once, test everywhere.

use crate::economy::Currency;

// =============================================================================
// DAMAGE
// =============================================================================

/// Each point of defense cancels this much attack power.
pub const DEFENSE_WEIGHT: f64 = 1.5;

/// Floor applied to every hit so no opponent is unkillable.
pub const MIN_DAMAGE: u32 = 1;

// =============================================================================
// LEVELING
// =============================================================================

pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_EXP_TO_NEXT_LEVEL: u64 = 100;

/// Exp requirement after a level-up, as a percentage of the previous one.
/// Integer math rounds down.
pub const EXP_GROWTH_PERCENT: u64 = 120;

/// Stats for roster entries that don't declare their own.
pub const DEFAULT_CHARACTER_ATTACK: u32 = 20;
pub const DEFAULT_CHARACTER_DEFENSE: u32 = 5;

// =============================================================================
// ENCOUNTERS
// =============================================================================

/// Max HP of the first opponent in a run.
pub const BASE_OPPONENT_HP: u32 = 100;

/// Extra max HP per opponent already defeated in the run.
pub const OPPONENT_HP_PER_DEFEAT: u32 = 100;

pub const DEFAULT_COIN_REWARD: u64 = 10;
pub const DEFAULT_CRYSTAL_REWARD: u64 = 1;
pub const DEFAULT_EXP_REWARD: u64 = 25;

/// Player attack gained per defeat in simple-battle mode.
pub const ATTACK_GAIN_PER_DEFEAT: u32 = 10;

/// Player attack when no character stats are available.
pub const STARTING_PLAYER_ATTACK: u32 = 10;

/// Skill power when neither the skill nor the character provides one.
pub const FALLBACK_SKILL_DAMAGE: u32 = 10;

// =============================================================================
// SUMMONS
// =============================================================================

pub const SUMMON_CURRENCY: Currency = Currency::Crystals;
pub const SINGLE_SUMMON_COST: u64 = 5;
pub const MULTI_SUMMON_COST: u64 = 50;
pub const MULTI_SUMMON_COUNT: usize = 10;

// =============================================================================
// ACCOUNT
// =============================================================================

pub const MAX_TEAM_SIZE: usize = 4;

/// Sampling period for cooldown countdowns.
pub const COOLDOWN_POLL_INTERVAL_MS: u64 = 100;

/// Simulated time between two player actions in the headless runner.
pub const ACTION_INTERVAL_MS: u64 = 1_000;

// =============================================================================
// PERSISTENCE
// =============================================================================

pub const PERSISTED_SCHEMA_VERSION: u32 = 1;
pub const DATA_DIR_NAME: &str = ".gacha";

pub const KEY_WALLET: &str = "wallet";
pub const KEY_ACCOUNT: &str = "account";
pub const KEY_ROSTER: &str = "roster";
pub const KEY_SUMMON_HISTORY: &str = "summon_history";
pub const KEY_LATEST_DRAW: &str = "latest_draw";
pub const KEY_ANNOUNCED_UNLOCKS: &str = "announced_unlocks";
