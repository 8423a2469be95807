//! Saved decks.
//!
//! - `DeckStore`: in-memory list of saved decks with CRUD operations
//! - `SavedDeck` / `DeckCardRecord`: the stored shape, as served over HTTP
//! - `NewDeck` / `DeckUpdate`: create and update requests
//! - `NewDeckCard` / `DeckCardUpdate`: single-card edits of a saved deck

pub mod decks;
pub mod records;

pub use decks::{sample_decks, DeckStore, DEFAULT_USER_ID};
pub use records::{DeckCardRecord, DeckCardUpdate, DeckUpdate, NewDeck, NewDeckCard, SavedDeck};
