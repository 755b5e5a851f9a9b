use serde::{Deserialize, Serialize};

use crate::encounter::OpponentKind;
use crate::items::EquipmentItem;
use crate::summon::RosterEntry;

/// Opponent as supplied by the content feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentRecord {
    pub id: String,
    pub name: String,
    /// Display-only; spawned HP follows the encounter scaling curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_reward: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crystal_reward: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_reward: Option<u64>,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub kind: OpponentKind,
}

impl OpponentRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hp: None,
            image: None,
            coin_reward: None,
            crystal_reward: None,
            exp_reward: None,
            defense: 0,
            kind: OpponentKind::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl BackgroundRecord {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            image: None,
        }
    }
}

/// Everything the content feed provides. Read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    #[serde(default)]
    pub battle_opponents: Vec<OpponentRecord>,
    #[serde(default)]
    pub event_opponents: Vec<OpponentRecord>,
    #[serde(default)]
    pub backgrounds: Vec<BackgroundRecord>,
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
    #[serde(default)]
    pub items: Vec<EquipmentItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_opponent_record() {
        let record: OpponentRecord =
            serde_json::from_str(r#"{"id": "slime", "name": "Slime"}"#).unwrap();
        assert_eq!(record, OpponentRecord::new("slime", "Slime"));
    }

    #[test]
    fn test_opponent_record_optional_fields() {
        let json = r#"{"id": "ogre", "name": "Ogre", "hp": 500, "image": "ogre.png",
                       "coinReward": 40, "crystalReward": 3, "defense": 6, "kind": "boss"}"#;
        let record: OpponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.coin_reward, Some(40));
        assert_eq!(record.crystal_reward, Some(3));
        assert_eq!(record.exp_reward, None);
        assert_eq!(record.kind, OpponentKind::Boss);
    }
}
