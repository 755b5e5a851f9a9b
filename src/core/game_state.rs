use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::{Character, Element};
use crate::core::constants::*;
use crate::economy::Wallet;
use crate::error::{GameError, GameResult};
use crate::persistence::{load_list, load_or_default, save_list, save_or_warn, KeyValueStore};
use crate::skills::UnlockAnnouncer;
use crate::summon::{SummonEngine, SummonRecord};

fn starting_level() -> u32 {
    STARTING_LEVEL
}

/// Account-wide progress: one level per opponent defeated, plus the team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default = "starting_level")]
    pub level: u32,
    /// Character ids, lead first.
    #[serde(default)]
    pub team: Vec<String>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            level: STARTING_LEVEL,
            team: Vec::new(),
        }
    }
}

/// Everything a profile persists.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub wallet: Wallet,
    pub account: Account,
    pub roster: Vec<Character>,
    pub summons: SummonEngine,
    pub unlocks: UnlockAnnouncer,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every key from `store`. Missing or corrupt keys start fresh.
    ///
    /// Team ids that no longer resolve to a roster entry are dropped.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let history: Vec<SummonRecord> = load_list(store, KEY_SUMMON_HISTORY);
        let latest: Vec<SummonRecord> = load_list(store, KEY_LATEST_DRAW);
        let mut state = Self {
            wallet: load_or_default(store, KEY_WALLET),
            account: load_or_default(store, KEY_ACCOUNT),
            roster: load_list(store, KEY_ROSTER),
            summons: SummonEngine::from_parts(history, latest),
            unlocks: load_or_default(store, KEY_ANNOUNCED_UNLOCKS),
        };
        state.prune_team();
        state
    }

    /// Writes every key. Returns false if any write failed; the failures
    /// are logged and the in-memory state is kept.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> bool {
        let results = [
            save_or_warn(store, KEY_WALLET, &self.wallet),
            save_or_warn(store, KEY_ACCOUNT, &self.account),
            save_list(store, KEY_ROSTER, &self.roster),
            save_list(store, KEY_SUMMON_HISTORY, self.summons.history()),
            save_list(store, KEY_LATEST_DRAW, self.summons.latest_draw()),
            save_or_warn(store, KEY_ANNOUNCED_UNLOCKS, &self.unlocks),
        ];
        results.iter().all(|saved| *saved)
    }

    /// Adds a new level-1 character and returns its id. It joins the team
    /// when there is room.
    pub fn create_character(&mut self, name: &str, element: Element) -> String {
        let id = Uuid::new_v4().to_string();
        let character = Character::new(
            id.clone(),
            name,
            element,
            DEFAULT_CHARACTER_ATTACK,
            DEFAULT_CHARACTER_DEFENSE,
        );
        tracing::info!(character = %id, name, element = element.name(), "character created");
        self.join(character);
        id
    }

    /// Adds summoned characters not already owned. Returns the ids added.
    pub fn add_summoned(&mut self, records: &[SummonRecord]) -> Vec<String> {
        let mut added = Vec::new();
        for record in records {
            if self.character(&record.character.id).is_some() {
                continue;
            }
            let character = Character::from_roster(&record.character);
            added.push(character.id.clone());
            self.join(character);
        }
        added
    }

    /// Replaces the team. Every id must be owned.
    pub fn set_team(&mut self, ids: Vec<String>) -> GameResult<()> {
        if ids.len() > MAX_TEAM_SIZE {
            return Err(GameError::TeamTooLarge {
                max: MAX_TEAM_SIZE,
                got: ids.len(),
            });
        }
        if let Some(unknown) = ids.iter().find(|id| self.character(id).is_none()) {
            return Err(GameError::UnknownCharacter(unknown.clone()));
        }
        self.account.team = ids;
        Ok(())
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.roster.iter().find(|c| c.id == id)
    }

    /// First team member that is owned, else the first owned character.
    pub fn lead_character(&self) -> Option<&Character> {
        self.account
            .team
            .iter()
            .find_map(|id| self.character(id))
            .or_else(|| self.roster.first())
    }

    pub fn lead_character_id(&self) -> Option<String> {
        self.lead_character().map(|c| c.id.clone())
    }

    fn prune_team(&mut self) {
        let roster = &self.roster;
        let before = self.account.team.len();
        self.account
            .team
            .retain(|id| roster.iter().any(|c| &c.id == id));
        let dropped = before - self.account.team.len();
        if dropped > 0 {
            tracing::warn!(dropped, "team referenced characters missing from the roster");
        }
    }

    fn join(&mut self, character: Character) {
        self.unlocks.mark_known(&character);
        if self.account.team.len() < MAX_TEAM_SIZE {
            self.account.team.push(character.id.clone());
        }
        self.roster.push(character);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{Currency, CurrencyLedger};
    use crate::persistence::MemoryStore;
    use crate::summon::RosterEntry;

    fn summoned(ids: &[&str]) -> Vec<SummonRecord> {
        ids.iter()
            .map(|id| SummonRecord::new(RosterEntry::new(*id, id.to_uppercase())))
            .collect()
    }

    #[test]
    fn test_account_defaults_to_level_one() {
        assert_eq!(Account::default().level, 1);
        let parsed: Account = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.level, 1);
    }

    #[test]
    fn test_create_character_joins_team() {
        let mut state = GameState::new();
        let id = state.create_character("Aria", Element::Water);
        let c = state.character(&id).unwrap();
        assert_eq!(c.level, 1);
        assert_eq!(c.element, Element::Water);
        assert_eq!(state.account.team, vec![id.clone()]);
        assert_eq!(state.lead_character_id(), Some(id));
    }

    #[test]
    fn test_team_caps_at_four() {
        let mut state = GameState::new();
        for i in 0..6 {
            state.create_character(&format!("Hero {i}"), Element::Neutral);
        }
        assert_eq!(state.roster.len(), 6);
        assert_eq!(state.account.team.len(), MAX_TEAM_SIZE);
    }

    #[test]
    fn test_add_summoned_skips_owned() {
        let mut state = GameState::new();
        let added = state.add_summoned(&summoned(&["a", "b", "a"]));
        assert_eq!(added, vec!["a".to_string(), "b".to_string()]);
        assert!(state.add_summoned(&summoned(&["b"])).is_empty());
        assert_eq!(state.roster.len(), 2);
    }

    #[test]
    fn test_set_team_validates() {
        let mut state = GameState::new();
        state.add_summoned(&summoned(&["a", "b", "c", "d", "e"]));

        let err = state.set_team(vec!["a".into(), "zzz".into()]).unwrap_err();
        assert!(matches!(err, GameError::UnknownCharacter(id) if id == "zzz"));

        let five: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
        let err = state.set_team(five).unwrap_err();
        assert!(matches!(err, GameError::TeamTooLarge { max: 4, got: 5 }));

        state.set_team(vec!["e".into(), "a".into()]).unwrap();
        assert_eq!(state.lead_character().unwrap().id, "e");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut state = GameState::new();
        state.wallet.credit(Currency::Crystals, 7);
        state.account.level = 9;
        state.create_character("Aria", Element::Fire);

        let mut store = MemoryStore::new();
        assert!(state.save(&mut store));

        let loaded = GameState::load(&store);
        assert_eq!(loaded.wallet.balance(Currency::Crystals), 7);
        assert_eq!(loaded.account, state.account);
        assert_eq!(loaded.roster, state.roster);
        assert_eq!(loaded.unlocks, state.unlocks);
    }

    #[test]
    fn test_lost_roster_frees_the_team() {
        let mut state = GameState::new();
        for i in 0..MAX_TEAM_SIZE {
            state.create_character(&format!("Hero {i}"), Element::Earth);
        }
        let mut store = MemoryStore::new();
        assert!(state.save(&mut store));
        store.write(KEY_ROSTER, "{corrupt").unwrap();

        let mut loaded = GameState::load(&store);
        assert!(loaded.roster.is_empty());
        assert!(loaded.account.team.is_empty());
        assert!(loaded.lead_character().is_none());

        let fresh = loaded.create_character("Fresh", Element::Fire);
        assert_eq!(loaded.account.team, vec![fresh.clone()]);
        assert_eq!(loaded.lead_character_id(), Some(fresh));
    }

    #[test]
    fn test_lead_skips_unowned_team_ids() {
        let mut state = GameState::new();
        state.add_summoned(&summoned(&["a", "b"]));
        state.account.team = vec!["gone".into(), "b".into()];
        assert_eq!(state.lead_character().unwrap().id, "b");

        state.account.team = vec!["gone".into()];
        assert_eq!(state.lead_character().unwrap().id, "a");
    }

    #[test]
    fn test_unavailable_store_loads_fresh() {
        let mut store = MemoryStore::unavailable();
        let mut state = GameState::load(&store);
        assert_eq!(state.account.level, 1);
        assert_eq!(state.wallet, Wallet::default());
        state.create_character("Aria", Element::Fire);
        assert!(!state.save(&mut store));
        assert_eq!(state.roster.len(), 1);
    }
}
