//! Library error type.
//!
//! Validator queries never fail; they answer with values. `DeckError`
//! covers the operations that can: deck edits the rules refuse, lookups
//! of unknown ids, and decoding of external input.

use thiserror::Error;

use crate::cards::CardId;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("card {0} not found")]
    CardNotFound(CardId),

    #[error("deck {0} not found")]
    DeckNotFound(String),

    #[error("leader slots are full ({max} leaders allowed)")]
    LeaderSlotsFull { max: usize },

    #[error("card {0} is already a leader of this deck")]
    DuplicateLeader(CardId),

    #[error("base slot is already taken")]
    BaseSlotFull,

    #[error("card {card} is already at the copy limit of {max}")]
    CopyLimit { card: CardId, max: u8 },

    #[error("quantity {quantity} for card {card} exceeds the copy limit of {max}")]
    InvalidQuantity { card: CardId, quantity: u8, max: u8 },

    #[error("card {0} is not in this deck")]
    NotInDeck(CardId),

    #[error("unknown aspect: {0}")]
    UnknownAspect(String),

    #[error("invalid share code: {0}")]
    InvalidShareCode(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DeckError {
    /// True for lookups of ids that do not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DeckError::CardNotFound(_) | DeckError::DeckNotFound(_) | DeckError::NotInDeck(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DeckError::CopyLimit { card: CardId::new("7"), max: 3 };
        assert_eq!(err.to_string(), "card 7 is already at the copy limit of 3");

        let err = DeckError::NotInDeck(CardId::new("SOR-010"));
        assert_eq!(err.to_string(), "card SOR-010 is not in this deck");

        let err = DeckError::LeaderSlotsFull { max: 2 };
        assert_eq!(err.to_string(), "leader slots are full (2 leaders allowed)");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DeckError::DeckNotFound("abc".into()).is_not_found());
        assert!(DeckError::CardNotFound(CardId::new("1")).is_not_found());
        assert!(DeckError::NotInDeck(CardId::new("1")).is_not_found());
        assert!(!DeckError::BaseSlotFull.is_not_found());
    }
}
