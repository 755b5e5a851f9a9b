use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 3] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Accessory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Accessory => "accessory",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat stat bonuses granted by an equipped item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
}

impl StatBonuses {
    pub fn new(attack: u32, defense: u32) -> Self {
        Self { attack, defense }
    }
}

impl AddAssign for StatBonuses {
    fn add_assign(&mut self, rhs: Self) {
        self.attack = self.attack.saturating_add(rhs.attack);
        self.defense = self.defense.saturating_add(rhs.defense);
    }
}

/// Catalog entry for an equippable item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub slot: EquipmentSlot,
    #[serde(default)]
    pub bonuses: StatBonuses,
}
