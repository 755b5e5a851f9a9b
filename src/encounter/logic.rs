//! The encounter loop: spawn, damage, defeat, reward, respawn.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::*;
use crate::character::{Character, EffectiveStats};
use crate::content::{BackgroundRecord, ContentCatalog, ContentLoader, OpponentRecord};
use crate::core::combat_math::calculate_damage;
use crate::core::constants::ATTACK_GAIN_PER_DEFEAT;
use crate::core::game_state::Account;
use crate::core::progression::apply_experience;
use crate::economy::{Currency, CurrencyLedger};
use crate::error::{GameError, GameResult};

fn pool(catalog: &ContentCatalog, mode: EncounterMode) -> &[OpponentRecord] {
    match mode {
        EncounterMode::Battle => &catalog.battle_opponents,
        EncounterMode::Event => &catalog.event_opponents,
    }
}

/// One run of opponents in a single mode.
///
/// Every action goes through `&mut self`, so an action and the resolution
/// of the defeat it caused can never interleave with another action.
#[derive(Debug, Clone)]
pub struct EncounterSession {
    mode: EncounterMode,
    phase: EncounterPhase,
    catalog: Option<ContentCatalog>,
    opponent: Option<Opponent>,
    background: Option<BackgroundRecord>,
    defeat_count: u32,
    player_attack: u32,
    /// Set once the current defeat has bumped the account level. Cleared
    /// when the next opponent is assigned.
    defeat_recorded: bool,
    last_error: Option<String>,
}

impl EncounterSession {
    pub fn new(mode: EncounterMode, player_attack: u32) -> Self {
        Self {
            mode,
            phase: EncounterPhase::AwaitingStart,
            catalog: None,
            opponent: None,
            background: None,
            defeat_count: 0,
            player_attack,
            defeat_recorded: false,
            last_error: None,
        }
    }

    pub fn mode(&self) -> EncounterMode {
        self.mode
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn opponent(&self) -> Option<&Opponent> {
        self.opponent.as_ref()
    }

    pub fn background(&self) -> Option<&BackgroundRecord> {
        self.background.as_ref()
    }

    pub fn defeat_count(&self) -> u32 {
        self.defeat_count
    }

    pub fn player_attack(&self) -> u32 {
        self.player_attack
    }

    /// `resolved` with its attack replaced by the session's player attack,
    /// so skills without their own power pick up battle-mode growth.
    pub fn acting_stats(&self, resolved: EffectiveStats) -> EffectiveStats {
        EffectiveStats {
            attack: self.player_attack,
            ..resolved
        }
    }

    /// Why the last start attempt failed, if it did.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn require(&self, expected: EncounterPhase, action: &'static str) -> GameResult<()> {
        if self.phase != expected {
            return Err(GameError::InvalidPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Loads content and spawns the first opponent.
    ///
    /// A failed load leaves the session in `AwaitingStart` with
    /// [`last_error`](Self::last_error) set; no opponent is created.
    pub fn start<L: ContentLoader + ?Sized, R: Rng>(
        &mut self,
        loader: &L,
        rng: &mut R,
    ) -> GameResult<&Opponent> {
        self.require(EncounterPhase::AwaitingStart, "start")?;

        let catalog = match loader.load() {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(error = %err, "encounter content failed to load");
                self.last_error = Some(err.to_string());
                return Err(err.into());
            }
        };
        if pool(&catalog, self.mode).is_empty() {
            let err = GameError::EmptyPool(self.mode.name());
            self.last_error = Some(err.to_string());
            return Err(err);
        }

        self.last_error = None;
        self.catalog = Some(catalog);
        let (record, background) = self.pick_next(rng)?;
        self.assign(record, background);
        self.phase = EncounterPhase::InProgress;
        tracing::info!(mode = self.mode.name(), "encounter started");

        self.opponent
            .as_ref()
            .ok_or(GameError::EmptyPool(self.mode.name()))
    }

    /// Replaces the in-memory catalog.
    ///
    /// Failures, and catalogs without opponents for the current mode, are
    /// logged and the current catalog stays in use. Returns whether the
    /// catalog was replaced.
    pub fn refresh_catalog<L: ContentLoader + ?Sized>(&mut self, loader: &L) -> bool {
        if self.phase == EncounterPhase::Ended {
            return false;
        }
        match loader.load() {
            Ok(catalog) if !pool(&catalog, self.mode).is_empty() => {
                self.catalog = Some(catalog);
                true
            }
            Ok(_) => {
                tracing::warn!(
                    mode = self.mode.name(),
                    "refreshed catalog has no opponents for this mode, keeping current"
                );
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog refresh failed, keeping current");
                false
            }
        }
    }

    /// Basic attack with the session's player attack.
    pub fn strike(&mut self) -> GameResult<ActionOutcome> {
        self.apply_power(self.player_attack)
    }

    /// Hits the current opponent with `power` (e.g. a skill activation).
    ///
    /// Moves to `Resolving` when the opponent reaches 0 HP.
    pub fn apply_power(&mut self, power: u32) -> GameResult<ActionOutcome> {
        self.require(EncounterPhase::InProgress, "act")?;
        let opponent = self
            .opponent
            .as_mut()
            .ok_or(GameError::EmptyPool("opponent"))?;

        let damage = calculate_damage(power, opponent.defense);
        opponent.take_damage(damage);
        let remaining_hp = opponent.current_hp;
        let defeated = !opponent.is_alive();
        tracing::debug!(
            opponent = %opponent.id,
            power,
            damage,
            remaining_hp,
            "player action"
        );

        if defeated {
            self.phase = EncounterPhase::Resolving;
        }
        Ok(ActionOutcome {
            damage,
            remaining_hp,
            defeated,
        })
    }

    /// Bumps the account level for the pending defeat, at most once.
    ///
    /// Safe to call on every render of the defeat. Returns whether the level
    /// was incremented by this call.
    pub fn record_account_progress(&mut self, account: &mut Account) -> bool {
        if self.phase != EncounterPhase::Resolving || self.defeat_recorded {
            return false;
        }
        account.level = account.level.saturating_add(1);
        self.defeat_recorded = true;
        true
    }

    /// Grants rewards for the defeated opponent and spawns the next one.
    ///
    /// Coins and crystals go to the ledger, exp to `character` when given.
    /// In battle mode the player attack grows. The next opponent's HP scales
    /// with the new defeat count.
    pub fn resolve_defeat<L: CurrencyLedger + ?Sized, R: Rng>(
        &mut self,
        ledger: &mut L,
        account: &mut Account,
        character: Option<&mut Character>,
        rng: &mut R,
    ) -> GameResult<DefeatOutcome> {
        self.require(EncounterPhase::Resolving, "resolve a defeat")?;
        // Choose before mutating so a failure leaves nothing half-applied.
        let (next_record, next_background) = self.pick_next(rng)?;
        let defeated = self
            .opponent
            .take()
            .ok_or(GameError::EmptyPool("opponent"))?;

        ledger.credit(Currency::Coins, defeated.coin_reward);
        ledger.credit(Currency::Crystals, defeated.crystal_reward);
        let level_change = character.map(|c| apply_experience(c, defeated.exp_reward));
        self.record_account_progress(account);

        if self.mode == EncounterMode::Battle {
            self.player_attack = self.player_attack.saturating_add(ATTACK_GAIN_PER_DEFEAT);
        }
        self.defeat_count = self.defeat_count.saturating_add(1);

        self.assign(next_record, next_background);
        self.phase = EncounterPhase::InProgress;

        let next_max_hp = self.opponent.as_ref().map_or(0, |o| o.max_hp);
        tracing::info!(
            opponent = %defeated.id,
            defeat_count = self.defeat_count,
            coins = defeated.coin_reward,
            crystals = defeated.crystal_reward,
            next_max_hp,
            "opponent defeated"
        );

        Ok(DefeatOutcome {
            coins: defeated.coin_reward,
            crystals: defeated.crystal_reward,
            exp: defeated.exp_reward,
            defeated,
            level_change,
            account_level: account.level,
            defeat_count: self.defeat_count,
            player_attack: self.player_attack,
            next_max_hp,
        })
    }

    /// Switches between battle and event runs. Resets the defeat count and
    /// waits for a new start.
    pub fn switch_mode(&mut self, mode: EncounterMode) -> GameResult<()> {
        if matches!(
            self.phase,
            EncounterPhase::Resolving | EncounterPhase::Ended
        ) {
            return Err(GameError::InvalidPhase {
                action: "switch mode",
                phase: self.phase,
            });
        }
        self.mode = mode;
        self.defeat_count = 0;
        self.opponent = None;
        self.background = None;
        self.defeat_recorded = false;
        self.phase = EncounterPhase::AwaitingStart;
        Ok(())
    }

    /// Tears the session down. Later loads and actions are ignored or
    /// refused; balances already credited are untouched.
    pub fn end(&mut self) {
        self.phase = EncounterPhase::Ended;
        self.opponent = None;
        self.catalog = None;
    }

    fn pick_next<R: Rng>(
        &self,
        rng: &mut R,
    ) -> GameResult<(OpponentRecord, Option<BackgroundRecord>)> {
        let catalog = self
            .catalog
            .as_ref()
            .ok_or_else(|| GameError::ContentUnavailable("catalog not loaded".to_string()))?;
        let record = pool(catalog, self.mode)
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptyPool(self.mode.name()))?;
        let background = catalog.backgrounds.choose(rng).cloned();
        Ok((record, background))
    }

    fn assign(&mut self, record: OpponentRecord, background: Option<BackgroundRecord>) {
        self.opponent = Some(Opponent::spawn(&record, scaled_max_hp(self.defeat_count)));
        self.background = background;
        self.defeat_recorded = false;
    }
}
