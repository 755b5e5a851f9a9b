//! Single and multi summons.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{RosterEntry, SummonRecord};
use crate::core::constants::*;
use crate::economy::CurrencyLedger;
use crate::error::{GameError, GameResult};

/// One uniform draw from the pool.
pub fn draw_single<R: Rng + ?Sized>(pool: &[RosterEntry], rng: &mut R) -> Option<RosterEntry> {
    pool.choose(rng).cloned()
}

/// `count` draws in draw order.
///
/// Pools with at least `count` entries are sampled without replacement
/// (shuffle and take), so no entry repeats. Smaller pools fall back to
/// independent draws with replacement.
pub fn draw_many<R: Rng + ?Sized>(
    pool: &[RosterEntry],
    count: usize,
    rng: &mut R,
) -> Vec<RosterEntry> {
    if pool.is_empty() {
        return Vec::new();
    }
    if pool.len() >= count {
        let mut indices: Vec<usize> = (0..pool.len()).collect();
        let (picked, _) = indices.partial_shuffle(rng, count);
        picked.iter().map(|&i| pool[i].clone()).collect()
    } else {
        (0..count)
            .filter_map(|_| pool.choose(rng).cloned())
            .collect()
    }
}

/// Summon history plus the most recent draw.
///
/// `latest_draw` is overwritten by every successful summon and keeps draw
/// order for one-by-one reveal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummonEngine {
    history: Vec<SummonRecord>,
    latest: Vec<SummonRecord>,
}

impl SummonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(history: Vec<SummonRecord>, latest: Vec<SummonRecord>) -> Self {
        Self { history, latest }
    }

    pub fn history(&self) -> &[SummonRecord] {
        &self.history
    }

    pub fn latest_draw(&self) -> &[SummonRecord] {
        &self.latest
    }

    /// Spends [`SINGLE_SUMMON_COST`] crystals for one character.
    ///
    /// Insufficient funds or an empty pool fail with nothing changed.
    pub fn single_summon<L: CurrencyLedger + ?Sized, R: Rng + ?Sized>(
        &mut self,
        ledger: &mut L,
        pool: &[RosterEntry],
        rng: &mut R,
    ) -> GameResult<&[SummonRecord]> {
        ledger.ensure_funds(SUMMON_CURRENCY, SINGLE_SUMMON_COST)?;
        let drawn = draw_single(pool, rng).ok_or(GameError::EmptyPool("roster"))?;
        ledger.debit(SUMMON_CURRENCY, SINGLE_SUMMON_COST)?;
        Ok(self.commit(vec![drawn]))
    }

    /// Spends [`MULTI_SUMMON_COST`] crystals for [`MULTI_SUMMON_COUNT`]
    /// characters.
    pub fn multi_summon<L: CurrencyLedger + ?Sized, R: Rng + ?Sized>(
        &mut self,
        ledger: &mut L,
        pool: &[RosterEntry],
        rng: &mut R,
    ) -> GameResult<&[SummonRecord]> {
        ledger.ensure_funds(SUMMON_CURRENCY, MULTI_SUMMON_COST)?;
        if pool.is_empty() {
            return Err(GameError::EmptyPool("roster"));
        }
        let drawn = draw_many(pool, MULTI_SUMMON_COUNT, rng);
        ledger.debit(SUMMON_CURRENCY, MULTI_SUMMON_COST)?;
        Ok(self.commit(drawn))
    }

    fn commit(&mut self, drawn: Vec<RosterEntry>) -> &[SummonRecord] {
        let records: Vec<SummonRecord> = drawn.into_iter().map(SummonRecord::new).collect();
        tracing::info!(
            count = records.len(),
            ids = ?records.iter().map(|r| r.character.id.as_str()).collect::<Vec<_>>(),
            "summon committed"
        );
        self.history.extend(records.iter().cloned());
        self.latest = records;
        &self.latest
    }
}
