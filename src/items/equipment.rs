use super::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item ids equipped per slot.
///
/// New slots must be `#[serde(default)]` so older profiles still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub accessory: Option<String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&str> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_deref(),
            EquipmentSlot::Armor => self.armor.as_deref(),
            EquipmentSlot::Accessory => self.accessory.as_deref(),
        }
    }

    /// Puts `item_id` in `slot`, returning whatever was there.
    pub fn set(&mut self, slot: EquipmentSlot, item_id: Option<String>) -> Option<String> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
        };
        std::mem::replace(target, item_id)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &str)> {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }
}

/// Owned item ids with counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item_id: &str) {
        *self.counts.entry(item_id.to_string()).or_insert(0) += 1;
    }

    /// Removes one copy. Returns false if none is owned.
    pub fn remove(&mut self, item_id: &str) -> bool {
        match self.counts.get_mut(item_id) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(item_id);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.count(item_id) > 0
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert_eq!(eq.iter_equipped().count(), 0);
    }

    #[test]
    fn test_set_returns_displaced_item() {
        let mut eq = Equipment::new();
        assert_eq!(eq.set(EquipmentSlot::Weapon, Some("sword".into())), None);
        assert_eq!(
            eq.set(EquipmentSlot::Weapon, Some("axe".into())),
            Some("sword".to_string())
        );
        assert_eq!(eq.get(EquipmentSlot::Weapon), Some("axe"));
    }

    #[test]
    fn test_iter_equipped_in_slot_order() {
        let mut eq = Equipment::new();
        eq.set(EquipmentSlot::Accessory, Some("ring".into()));
        eq.set(EquipmentSlot::Weapon, Some("sword".into()));
        let equipped: Vec<_> = eq.iter_equipped().collect();
        assert_eq!(
            equipped,
            vec![
                (EquipmentSlot::Weapon, "sword"),
                (EquipmentSlot::Accessory, "ring")
            ]
        );
    }

    #[test]
    fn test_inventory_is_a_multiset() {
        let mut inv = Inventory::new();
        inv.add("potion");
        inv.add("potion");
        inv.add("sword");
        assert_eq!(inv.count("potion"), 2);
        assert_eq!(inv.total(), 3);

        assert!(inv.remove("potion"));
        assert_eq!(inv.count("potion"), 1);
        assert!(inv.remove("potion"));
        assert!(!inv.contains("potion"));
        assert!(!inv.remove("potion"));
    }

    #[test]
    fn test_inventory_serializes_as_map() {
        let mut inv = Inventory::new();
        inv.add("sword");
        let json = serde_json::to_string(&inv).unwrap();
        assert_eq!(json, r#"{"sword":1}"#);
    }
}
