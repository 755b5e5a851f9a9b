//! Skill gating and activation.

use std::borrow::Cow;

use super::cooldown::CooldownTracker;
use super::types::{default_skills, Skill, SkillActivation, SkillState};
use crate::character::{Character, EffectiveStats};
use crate::core::constants::FALLBACK_SKILL_DAMAGE;

/// The character's own skills, or the shared default pool if it has none.
pub fn available_skills(character: &Character) -> Cow<'_, [Skill]> {
    if character.skills.is_empty() {
        Cow::Owned(default_skills())
    } else {
        Cow::Borrowed(&character.skills)
    }
}

/// Power of an activation: the skill's own power, else the resolved
/// attack, else [`FALLBACK_SKILL_DAMAGE`].
pub fn resolve_power(skill: &Skill, stats: Option<&EffectiveStats>) -> u32 {
    skill
        .power
        .or_else(|| stats.map(|s| s.attack).filter(|&attack| attack > 0))
        .unwrap_or(FALLBACK_SKILL_DAMAGE)
}

/// Skill gate and cooldown state for the active character.
///
/// Dropping the book cancels every pending cooldown for that character.
#[derive(Debug, Clone)]
pub struct SkillBook {
    character_id: String,
    cooldowns: CooldownTracker,
}

impl SkillBook {
    pub fn new(character_id: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            cooldowns: CooldownTracker::new(),
        }
    }

    pub fn state(&self, character: &Character, skill: &Skill, now: u64) -> SkillState {
        if !skill.is_unlocked_for(character) {
            return SkillState::Locked;
        }
        if self.cooldowns.is_ready(&skill.id, now) {
            SkillState::Ready
        } else {
            SkillState::Cooling {
                remaining_ms: self.cooldowns.remaining_ms(&skill.id, now),
            }
        }
    }

    /// State of every available skill, in declaration order.
    pub fn states(&self, character: &Character, now: u64) -> Vec<(Skill, SkillState)> {
        available_skills(character)
            .iter()
            .map(|skill| (skill.clone(), self.state(character, skill, now)))
            .collect()
    }

    /// Uses a skill if it is unlocked and not cooling down.
    ///
    /// Returns `None` for unknown, locked, or cooling skills. Nothing changes
    /// in that case and no power reaches the damage calculator.
    pub fn activate(
        &mut self,
        character: &Character,
        skill_id: &str,
        stats: Option<&EffectiveStats>,
        now: u64,
    ) -> Option<SkillActivation> {
        let skills = available_skills(character);
        let skill = skills.iter().find(|s| s.id == skill_id)?;

        let state = self.state(character, skill, now);
        if !state.is_usable() {
            tracing::debug!(
                character = %self.character_id,
                skill = skill_id,
                ?state,
                "activation ignored"
            );
            return None;
        }

        if let Some(cooldown_ms) = skill.cooldown_ms() {
            self.cooldowns.start(&skill.id, cooldown_ms, now);
        }
        Some(SkillActivation {
            skill_id: skill.id.clone(),
            power: resolve_power(skill, stats),
        })
    }

    /// First ready skill with the highest resolved power.
    pub fn best_ready(
        &self,
        character: &Character,
        stats: Option<&EffectiveStats>,
        now: u64,
    ) -> Option<String> {
        let skills = available_skills(character);
        let mut best: Option<(&Skill, u32)> = None;
        for skill in skills.iter() {
            if !self.state(character, skill, now).is_usable() {
                continue;
            }
            let power = resolve_power(skill, stats);
            if best.map_or(true, |(_, p)| power > p) {
                best = Some((skill, power));
            }
        }
        best.map(|(skill, _)| skill.id.clone())
    }

    /// Timer tick: clears elapsed cooldowns and returns the ids that became
    /// ready.
    pub fn poll(&mut self, now: u64) -> Vec<String> {
        self.cooldowns.poll(now)
    }

    pub fn remaining_ms(&self, skill_id: &str, now: u64) -> u64 {
        self.cooldowns.remaining_ms(skill_id, now)
    }
}
