//! Error types shared across the engine.
//!
//! Gameplay failures surface as [`GameError`]. Storage and content loading
//! have their own enums so callers can decide whether to degrade or abort.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::economy::Currency;
use crate::encounter::EncounterPhase;
use crate::items::EquipmentSlot;

/// Errors returned by gameplay operations.
///
/// None of these are fatal: every failing operation leaves state untouched.
#[derive(Debug, Error)]
pub enum GameError {
    /// The content catalog could not be loaded or lacks the needed section.
    #[error("content unavailable: {0}")]
    ContentUnavailable(String),

    /// A debit was rejected because the balance is too low.
    #[error("insufficient {currency}: need {required}, have {available}")]
    InsufficientFunds {
        currency: Currency,
        required: u64,
        available: u64,
    },

    /// A draw or spawn was requested from an empty pool.
    #[error("the {0} pool is empty")]
    EmptyPool(&'static str),

    /// The item id is not in the item catalog.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// The item is known but the character does not own a copy.
    #[error("item not in inventory: {0}")]
    ItemNotOwned(String),

    /// Unequip was requested for an empty slot.
    #[error("nothing equipped in the {0} slot")]
    NotEquipped(EquipmentSlot),

    /// The character id is not in the roster.
    #[error("unknown character: {0}")]
    UnknownCharacter(String),

    /// A team larger than the allowed size was submitted.
    #[error("team holds at most {max} characters, got {got}")]
    TeamTooLarge { max: usize, got: usize },

    /// The encounter is not in a phase that accepts this operation.
    #[error("cannot {action} while the encounter is {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: EncounterPhase,
    },
}

pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by a [`crate::persistence::KeyValueStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("store is unavailable")]
    Unavailable,
}

/// Errors raised while loading the content catalog.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("content source unreachable: {0}")]
    Unreachable(String),
}

impl From<ContentError> for GameError {
    fn from(err: ContentError) -> Self {
        GameError::ContentUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_message() {
        let err = GameError::InsufficientFunds {
            currency: Currency::Crystals,
            required: 5,
            available: 4,
        };
        assert_eq!(err.to_string(), "insufficient crystals: need 5, have 4");
    }

    #[test]
    fn test_content_error_converts_to_content_unavailable() {
        let err: GameError = ContentError::Unreachable("timeout".to_string()).into();
        assert!(matches!(err, GameError::ContentUnavailable(msg) if msg.contains("timeout")));
    }
}
