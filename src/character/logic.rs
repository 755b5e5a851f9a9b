use super::types::Character;
use crate::error::{GameError, GameResult};
use crate::items::{EquipmentSlot, ItemCatalog};
use crate::summon::RosterEntry;

impl Character {
    /// Moves one owned copy of `item_id` into its slot.
    ///
    /// Whatever the slot held goes back to the inventory and its id is
    /// returned. Fails without changes if the item is unknown or not owned.
    pub fn equip(&mut self, catalog: &ItemCatalog, item_id: &str) -> GameResult<Option<String>> {
        let item = catalog
            .get(item_id)
            .ok_or_else(|| GameError::UnknownItem(item_id.to_string()))?;
        if !self.inventory.remove(item_id) {
            return Err(GameError::ItemNotOwned(item_id.to_string()));
        }

        let displaced = self.equipment.set(item.slot, Some(item_id.to_string()));
        if let Some(old) = &displaced {
            self.inventory.add(old);
        }
        tracing::debug!(character = %self.id, item = item_id, slot = %item.slot, "equipped");
        Ok(displaced)
    }

    /// Empties `slot` and returns its item to the inventory.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> GameResult<String> {
        let item_id = self
            .equipment
            .set(slot, None)
            .ok_or(GameError::NotEquipped(slot))?;
        self.inventory.add(&item_id);
        tracing::debug!(character = %self.id, item = %item_id, %slot, "unequipped");
        Ok(item_id)
    }

    /// A fresh level-1 character for a summoned roster entry.
    pub fn from_roster(entry: &RosterEntry) -> Self {
        let mut character = Character::new(
            entry.id.clone(),
            entry.name.clone(),
            entry.element,
            entry.attack,
            entry.defense,
        );
        character.base_id = entry.base_id.clone();
        character.skills = entry.skills.clone();
        character
    }
}

#[cfg(test)]
mod tests {
    use crate::character::{Character, EffectiveStats, Element};
    use crate::error::GameError;
    use crate::items::{EquipmentItem, EquipmentSlot, ItemCatalog, StatBonuses};
    use crate::summon::RosterEntry;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_items([
            EquipmentItem {
                id: "sword".into(),
                name: "Sword".into(),
                slot: EquipmentSlot::Weapon,
                bonuses: StatBonuses::new(15, 0),
            },
            EquipmentItem {
                id: "axe".into(),
                name: "Axe".into(),
                slot: EquipmentSlot::Weapon,
                bonuses: StatBonuses::new(22, 0),
            },
        ])
    }

    fn hero() -> Character {
        let mut c = Character::new("c1", "Aria", Element::Fire, 30, 10);
        c.inventory.add("sword");
        c.inventory.add("axe");
        c
    }

    #[test]
    fn test_equip_moves_item_out_of_inventory() {
        let mut c = hero();
        let displaced = c.equip(&catalog(), "sword").unwrap();
        assert_eq!(displaced, None);
        assert_eq!(c.equipment.get(EquipmentSlot::Weapon), Some("sword"));
        assert!(!c.inventory.contains("sword"));
    }

    #[test]
    fn test_equip_swaps_displaced_item_back() {
        let mut c = hero();
        c.equip(&catalog(), "sword").unwrap();
        let displaced = c.equip(&catalog(), "axe").unwrap();
        assert_eq!(displaced.as_deref(), Some("sword"));
        assert!(c.inventory.contains("sword"));
        assert!(!c.inventory.contains("axe"));
    }

    #[test]
    fn test_equip_unknown_item_fails_without_changes() {
        let mut c = hero();
        c.inventory.add("mystery");
        let before = c.clone();
        assert!(matches!(
            c.equip(&catalog(), "mystery"),
            Err(GameError::UnknownItem(_))
        ));
        assert_eq!(c, before);
    }

    #[test]
    fn test_equip_unowned_item_fails() {
        let mut c = Character::new("c1", "Aria", Element::Fire, 30, 10);
        assert!(matches!(
            c.equip(&catalog(), "sword"),
            Err(GameError::ItemNotOwned(_))
        ));
        assert_eq!(c.equipment.iter_equipped().count(), 0);
    }

    #[test]
    fn test_unequip_returns_item() {
        let mut c = hero();
        c.equip(&catalog(), "sword").unwrap();
        assert_eq!(c.unequip(EquipmentSlot::Weapon).unwrap(), "sword");
        assert_eq!(c.inventory.count("sword"), 1);
        assert!(matches!(
            c.unequip(EquipmentSlot::Weapon),
            Err(GameError::NotEquipped(EquipmentSlot::Weapon))
        ));
    }

    #[test]
    fn test_stats_follow_equipment_changes() {
        let mut c = hero();
        let catalog = catalog();
        c.equip(&catalog, "axe").unwrap();
        assert_eq!(EffectiveStats::resolve(&c, &catalog).attack, 52);
        c.unequip(EquipmentSlot::Weapon).unwrap();
        assert_eq!(EffectiveStats::resolve(&c, &catalog).attack, 30);
    }

    #[test]
    fn test_from_roster_keeps_base_id() {
        let entry = RosterEntry {
            id: "aria_summer".into(),
            name: "Aria (Summer)".into(),
            base_id: Some("aria".into()),
            image: None,
            element: Element::Water,
            attack: 40,
            defense: 12,
            skills: Vec::new(),
        };
        let c = Character::from_roster(&entry);
        assert_eq!(c.level, 1);
        assert_eq!(c.base_or_own_id(), "aria");
        assert_eq!(c.element, Element::Water);
        assert_eq!(c.attack, 40);
    }
}
