//! Currency balances.
//!
//! Encounter rewards credit the ledger and summons debit it. Both take the
//! ledger by `&mut`, so every read-modify-write happens against the latest
//! balance and no two writers can interleave.

use serde::{Deserialize, Serialize};

use super::types::Currency;
use crate::error::{GameError, GameResult};

/// Integer balances per currency that never go negative.
pub trait CurrencyLedger {
    fn balance(&self, currency: Currency) -> u64;

    fn credit(&mut self, currency: Currency, amount: u64);

    /// Removes `amount` or fails with [`GameError::InsufficientFunds`],
    /// leaving the balance unchanged. Debits are rejected, never clamped.
    fn debit(&mut self, currency: Currency, amount: u64) -> GameResult<()>;

    /// Same check as [`debit`](Self::debit) without touching the balance.
    fn ensure_funds(&self, currency: Currency, amount: u64) -> GameResult<()> {
        let available = self.balance(currency);
        if available < amount {
            return Err(GameError::InsufficientFunds {
                currency,
                required: amount,
                available,
            });
        }
        Ok(())
    }
}

/// The persisted account wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub coins: u64,
    #[serde(default)]
    pub crystals: u64,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balances(coins: u64, crystals: u64) -> Self {
        Self { coins, crystals }
    }

    fn slot_mut(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::Coins => &mut self.coins,
            Currency::Crystals => &mut self.crystals,
        }
    }
}

impl CurrencyLedger for Wallet {
    fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Coins => self.coins,
            Currency::Crystals => self.crystals,
        }
    }

    fn credit(&mut self, currency: Currency, amount: u64) {
        let slot = self.slot_mut(currency);
        *slot = slot.saturating_add(amount);
    }

    fn debit(&mut self, currency: Currency, amount: u64) -> GameResult<()> {
        self.ensure_funds(currency, amount)?;
        *self.slot_mut(currency) -= amount;
        Ok(())
    }
}
