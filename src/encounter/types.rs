use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::OpponentRecord;
use crate::core::combat_math::{apply_damage, is_alive};
use crate::core::constants::*;
use crate::core::progression::LevelChange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpponentKind {
    #[default]
    Enemy,
    Boss,
    EventBoss,
}

/// Which opponent pool a run draws from. Switching resets the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterMode {
    /// Simple battle: the player's attack grows with every defeat.
    Battle,
    Event,
}

impl EncounterMode {
    pub fn name(&self) -> &'static str {
        match self {
            EncounterMode::Battle => "battle",
            EncounterMode::Event => "event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterPhase {
    AwaitingStart,
    InProgress,
    /// Opponent at 0 HP; rewards and respawn pending. Actions are refused.
    Resolving,
    /// Torn down. Terminal.
    Ended,
}

impl fmt::Display for EncounterPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EncounterPhase::AwaitingStart => "awaiting start",
            EncounterPhase::InProgress => "in progress",
            EncounterPhase::Resolving => "resolving",
            EncounterPhase::Ended => "ended",
        })
    }
}

/// Max HP for the opponent spawned after `defeat_count` defeats.
pub fn scaled_max_hp(defeat_count: u32) -> u32 {
    BASE_OPPONENT_HP.saturating_add(OPPONENT_HP_PER_DEFEAT.saturating_mul(defeat_count))
}

/// A live opponent. Only its HP changes; it is discarded once defeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    pub id: String,
    pub name: String,
    pub kind: OpponentKind,
    pub image: Option<String>,
    pub max_hp: u32,
    pub current_hp: u32,
    pub defense: u32,
    pub coin_reward: u64,
    pub crystal_reward: u64,
    pub exp_reward: u64,
}

impl Opponent {
    /// Spawns at full HP with declared rewards or the defaults.
    pub fn spawn(record: &OpponentRecord, max_hp: u32) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            kind: record.kind,
            image: record.image.clone(),
            max_hp,
            current_hp: max_hp,
            defense: record.defense,
            coin_reward: record.coin_reward.unwrap_or(DEFAULT_COIN_REWARD),
            crystal_reward: record.crystal_reward.unwrap_or(DEFAULT_CRYSTAL_REWARD),
            exp_reward: record.exp_reward.unwrap_or(DEFAULT_EXP_REWARD),
        }
    }

    pub fn is_alive(&self) -> bool {
        is_alive(self.current_hp)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = apply_damage(self.current_hp, amount);
    }
}

/// Result of one player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub damage: u32,
    pub remaining_hp: u32,
    pub defeated: bool,
}

/// Everything granted when a defeat is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefeatOutcome {
    pub defeated: Opponent,
    pub coins: u64,
    pub crystals: u64,
    pub exp: u64,
    /// Set when a character received the exp.
    pub level_change: Option<LevelChange>,
    pub account_level: u32,
    pub defeat_count: u32,
    pub player_attack: u32,
    pub next_max_hp: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_is_linear_in_defeats() {
        assert_eq!(scaled_max_hp(0), 100);
        assert_eq!(scaled_max_hp(1), 200);
        assert_eq!(scaled_max_hp(9), 1_000);
        assert_eq!(scaled_max_hp(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_spawn_uses_default_rewards() {
        let opp = Opponent::spawn(&OpponentRecord::new("slime", "Slime"), 100);
        assert_eq!(opp.current_hp, 100);
        assert_eq!(opp.coin_reward, DEFAULT_COIN_REWARD);
        assert_eq!(opp.crystal_reward, DEFAULT_CRYSTAL_REWARD);
        assert_eq!(opp.exp_reward, DEFAULT_EXP_REWARD);
    }

    #[test]
    fn test_spawn_uses_declared_rewards() {
        let mut record = OpponentRecord::new("ogre", "Ogre");
        record.coin_reward = Some(40);
        record.crystal_reward = Some(0);
        let opp = Opponent::spawn(&record, 300);
        assert_eq!(opp.coin_reward, 40);
        assert_eq!(opp.crystal_reward, 0);
    }

    #[test]
    fn test_hp_clamps_at_zero() {
        let mut opp = Opponent::spawn(&OpponentRecord::new("slime", "Slime"), 100);
        opp.take_damage(250);
        assert_eq!(opp.current_hp, 0);
        assert!(!opp.is_alive());
    }

    #[test]
    fn test_event_boss_kind_json() {
        let kind: OpponentKind = serde_json::from_str(r#""eventBoss""#).unwrap();
        assert_eq!(kind, OpponentKind::EventBoss);
    }
}
