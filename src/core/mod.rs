//! Core types: configuration, errors, and id generation.
//!
//! Everything format-specific is carried by `DeckRules` rather than
//! hardcoded in the validator.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    CompletionWeights, DeckRules, STANDARD_LEADER_SLOTS, STANDARD_MAX_COPIES,
    STANDARD_MIN_DECK_SIZE,
};
pub use error::DeckError;
pub use rng::{IdRng, ID_LEN};
