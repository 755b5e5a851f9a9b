//! Remembers which skill unlocks each character has already announced.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::logic::available_skills;
use crate::character::Character;

/// Announced skill ids per character id. Persisted with the account so a
/// reload never repeats a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockAnnouncer {
    announced: BTreeMap<String, BTreeSet<String>>,
}

impl UnlockAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silently records every skill the character can already use.
    /// Call once when a character joins the roster.
    pub fn mark_known(&mut self, character: &Character) {
        let set = self.announced.entry(character.id.clone()).or_default();
        for skill in available_skills(character).iter() {
            if skill.is_unlocked_for(character) {
                set.insert(skill.id.clone());
            }
        }
    }

    /// Skill ids that went from locked at `previous_level` to unlocked at the
    /// character's current level and were never announced before.
    ///
    /// Each returned id is remembered, so it is reported exactly once.
    pub fn detect_unlocks(&mut self, character: &Character, previous_level: u32) -> Vec<String> {
        let set = self.announced.entry(character.id.clone()).or_default();
        let mut fresh = Vec::new();
        for skill in available_skills(character).iter() {
            let newly_unlocked = skill.is_unlocked_for(character)
                && !skill.is_unlocked_at(previous_level, character.element);
            if newly_unlocked && set.insert(skill.id.clone()) {
                fresh.push(skill.id.clone());
            }
        }
        if !fresh.is_empty() {
            tracing::info!(character = %character.id, skills = ?fresh, "skills unlocked");
        }
        fresh
    }

    pub fn is_announced(&self, character_id: &str, skill_id: &str) -> bool {
        self.announced
            .get(character_id)
            .is_some_and(|set| set.contains(skill_id))
    }
}
