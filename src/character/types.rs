use serde::{Deserialize, Serialize};

use crate::core::constants::{STARTING_EXP_TO_NEXT_LEVEL, STARTING_LEVEL};
use crate::items::{Equipment, Inventory};
use crate::skills::Skill;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Light,
    Dark,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Wind => "wind",
            Element::Light => "light",
            Element::Dark => "dark",
            Element::Neutral => "neutral",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "earth" => Some(Element::Earth),
            "wind" => Some(Element::Wind),
            "light" => Some(Element::Light),
            "dark" => Some(Element::Dark),
            "neutral" => Some(Element::Neutral),
            _ => None,
        }
    }
}

/// A playable character owned by the account.
///
/// Level and exp only change through [`crate::core::progression`];
/// equipment only through [`Character::equip`] and [`Character::unequip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    /// Set for skinned variants of another character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_id: Option<String>,
    pub name: String,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next_level: u64,
    #[serde(default)]
    pub element: Element,
    pub attack: u32,
    pub defense: u32,
    /// Empty means the character draws from the shared default pool.
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub inventory: Inventory,
}

impl Character {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        element: Element,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            id: id.into(),
            base_id: None,
            name: name.into(),
            level: STARTING_LEVEL,
            exp: 0,
            exp_to_next_level: STARTING_EXP_TO_NEXT_LEVEL,
            element,
            attack,
            defense,
            skills: Vec::new(),
            equipment: Equipment::new(),
            inventory: Inventory::new(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    /// Id shared by all skins of the same character.
    pub fn base_or_own_id(&self) -> &str {
        self.base_id.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_starts_at_level_one() {
        let c = Character::new("c1", "Aria", Element::Water, 30, 10);
        assert_eq!(c.level, 1);
        assert_eq!(c.exp, 0);
        assert_eq!(c.exp_to_next_level, 100);
        assert!(c.skills.is_empty());
        assert_eq!(c.equipment.iter_equipped().count(), 0);
    }

    #[test]
    fn test_unknown_element_tag_is_neutral() {
        let e: Element = serde_json::from_str(r#""plasma""#).unwrap();
        assert_eq!(e, Element::Neutral);
    }

    #[test]
    fn test_element_parse() {
        assert_eq!(Element::parse("FIRE"), Some(Element::Fire));
        assert_eq!(Element::parse("plasma"), None);
    }

    #[test]
    fn test_minimal_json_loads() {
        let json = r#"{
            "id": "c1", "name": "Aria", "level": 3, "exp": 12,
            "expToNextLevel": 144, "attack": 30, "defense": 10
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.level, 3);
        assert_eq!(c.element, Element::Neutral);
        assert!(c.base_id.is_none());
        assert_eq!(c.base_or_own_id(), "c1");
    }
}
