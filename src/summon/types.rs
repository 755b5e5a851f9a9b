use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::Element;
use crate::core::constants::{DEFAULT_CHARACTER_ATTACK, DEFAULT_CHARACTER_DEFENSE};
use crate::skills::Skill;

fn default_attack() -> u32 {
    DEFAULT_CHARACTER_ATTACK
}

fn default_defense() -> u32 {
    DEFAULT_CHARACTER_DEFENSE
}

/// A character that can come out of a summon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub element: Element,
    #[serde(default = "default_attack")]
    pub attack: u32,
    #[serde(default = "default_defense")]
    pub defense: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<Skill>,
}

impl RosterEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_id: None,
            image: None,
            element: Element::default(),
            attack: DEFAULT_CHARACTER_ATTACK,
            defense: DEFAULT_CHARACTER_DEFENSE,
            skills: Vec::new(),
        }
    }
}

/// Snapshot of one drawn character. Never modified after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonRecord {
    /// Distinguishes repeated draws of the same character.
    pub record_id: Uuid,
    pub drawn_at: DateTime<Utc>,
    #[serde(flatten)]
    pub character: RosterEntry,
}

impl SummonRecord {
    pub fn new(character: RosterEntry) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            drawn_at: Utc::now(),
            character,
        }
    }
}
