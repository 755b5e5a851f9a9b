//! Static lookup from item id to slot and bonuses.

use super::types::EquipmentItem;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, EquipmentItem>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries win when ids repeat.
    pub fn from_items(items: impl IntoIterator<Item = EquipmentItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        Self { items }
    }

    pub fn get(&self, item_id: &str) -> Option<&EquipmentItem> {
        self.items.get(item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{EquipmentSlot, StatBonuses};

    fn item(id: &str, attack: u32) -> EquipmentItem {
        EquipmentItem {
            id: id.to_string(),
            name: id.to_string(),
            slot: EquipmentSlot::Weapon,
            bonuses: StatBonuses::new(attack, 0),
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = ItemCatalog::from_items([item("sword", 5)]);
        assert_eq!(catalog.get("sword").map(|i| i.bonuses.attack), Some(5));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_last() {
        let catalog = ItemCatalog::from_items([item("sword", 5), item("sword", 9)]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("sword").map(|i| i.bonuses.attack), Some(9));
    }
}
