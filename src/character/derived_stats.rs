use super::types::Character;
use crate::items::{ItemCatalog, StatBonuses};

/// Combat stats after equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStats {
    pub attack: u32,
    pub defense: u32,
}

impl EffectiveStats {
    /// Base stats plus the bonuses of every equipped item.
    ///
    /// Empty slots and ids missing from the catalog contribute nothing.
    /// Recompute after every equip/unequip; the result is not cached.
    pub fn resolve(character: &Character, catalog: &ItemCatalog) -> Self {
        let mut bonuses = StatBonuses::default();
        for (_, item_id) in character.equipment.iter_equipped() {
            if let Some(item) = catalog.get(item_id) {
                bonuses += item.bonuses;
            }
        }

        Self {
            attack: character.attack.saturating_add(bonuses.attack),
            defense: character.defense.saturating_add(bonuses.defense),
        }
    }

    /// Base stats only.
    pub fn base(character: &Character) -> Self {
        Self {
            attack: character.attack,
            defense: character.defense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Element;
    use crate::items::{EquipmentItem, EquipmentSlot};

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_items([
            EquipmentItem {
                id: "sword".into(),
                name: "Sword".into(),
                slot: EquipmentSlot::Weapon,
                bonuses: StatBonuses::new(15, 0),
            },
            EquipmentItem {
                id: "mail".into(),
                name: "Mail".into(),
                slot: EquipmentSlot::Armor,
                bonuses: StatBonuses::new(0, 8),
            },
            EquipmentItem {
                id: "charm".into(),
                name: "Charm".into(),
                slot: EquipmentSlot::Accessory,
                bonuses: StatBonuses::new(2, 2),
            },
        ])
    }

    #[test]
    fn test_no_equipment_returns_base_stats() {
        let c = Character::new("c1", "Aria", Element::Fire, 30, 10);
        let stats = EffectiveStats::resolve(&c, &catalog());
        assert_eq!(stats, EffectiveStats::base(&c));
        assert_eq!(stats, EffectiveStats { attack: 30, defense: 10 });
    }

    #[test]
    fn test_bonuses_sum_across_slots() {
        let mut c = Character::new("c1", "Aria", Element::Fire, 30, 10);
        c.equipment.set(EquipmentSlot::Weapon, Some("sword".into()));
        c.equipment.set(EquipmentSlot::Armor, Some("mail".into()));
        c.equipment.set(EquipmentSlot::Accessory, Some("charm".into()));

        let stats = EffectiveStats::resolve(&c, &catalog());
        assert_eq!(stats.attack, 30 + 15 + 2);
        assert_eq!(stats.defense, 10 + 8 + 2);
    }

    #[test]
    fn test_unknown_item_contributes_nothing() {
        let mut c = Character::new("c1", "Aria", Element::Fire, 30, 10);
        c.equipment.set(EquipmentSlot::Weapon, Some("lost_blade".into()));
        let stats = EffectiveStats::resolve(&c, &catalog());
        assert_eq!(stats, EffectiveStats::base(&c));
    }

    #[test]
    fn test_empty_catalog_returns_base_stats() {
        let mut c = Character::new("c1", "Aria", Element::Fire, 30, 10);
        c.equipment.set(EquipmentSlot::Weapon, Some("sword".into()));
        let stats = EffectiveStats::resolve(&c, &ItemCatalog::new());
        assert_eq!(stats, EffectiveStats::base(&c));
    }
}
