use serde::{Deserialize, Serialize};

use crate::character::{Character, Element};

fn default_required_level() -> u32 {
    1
}

/// Catalog data for a combat skill. Characters reference skills, they never
/// mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Overrides the user's attack when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u32>,
    /// Milliseconds before the skill can be used again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u64>,
    /// Minimum character level.
    #[serde(default = "default_required_level")]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_elements: Vec<Element>,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            power: None,
            cooldown: None,
            level: default_required_level(),
            element: None,
            allowed_elements: Vec::new(),
        }
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.power = Some(power);
        self
    }

    pub fn with_cooldown(mut self, cooldown_ms: u64) -> Self {
        self.cooldown = Some(cooldown_ms);
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_allowed_elements(mut self, elements: Vec<Element>) -> Self {
        self.allowed_elements = elements;
        self
    }

    /// Cooldown in ms, if the skill has a non-zero one.
    pub fn cooldown_ms(&self) -> Option<u64> {
        self.cooldown.filter(|&ms| ms > 0)
    }

    pub fn has_element_constraint(&self) -> bool {
        self.element.is_some() || !self.allowed_elements.is_empty()
    }

    /// `element` and `allowedElements` together form the allowed set.
    pub fn allows_element(&self, element: Element) -> bool {
        if !self.has_element_constraint() {
            return true;
        }
        self.element == Some(element) || self.allowed_elements.contains(&element)
    }

    pub fn is_unlocked_at(&self, level: u32, element: Element) -> bool {
        level >= self.level && self.allows_element(element)
    }

    pub fn is_unlocked_for(&self, character: &Character) -> bool {
        self.is_unlocked_at(character.level, character.element)
    }
}

/// Where a skill sits in its lifecycle for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillState {
    Locked,
    Ready,
    Cooling { remaining_ms: u64 },
}

impl SkillState {
    pub fn is_usable(&self) -> bool {
        matches!(self, SkillState::Ready)
    }
}

/// A successful activation, ready to feed the damage calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillActivation {
    pub skill_id: String,
    pub power: u32,
}

/// Shared pool for characters that declare no skills of their own.
pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("strike", "Strike"),
        Skill::new("heavy_blow", "Heavy Blow")
            .with_level(3)
            .with_cooldown(3_000),
        Skill::new("burst", "Burst")
            .with_level(5)
            .with_power(80)
            .with_cooldown(8_000),
    ]
}
