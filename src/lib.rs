//! # swu-deckbuilder
//!
//! Card browsing and deck construction rules for Star Wars: Unlimited.
//!
//! ## Design Principles
//!
//! 1. **Decks Are Values**: `DeckState` is immutable; every edit returns a
//!    new deck. Persistent `im` vectors keep the copies cheap.
//!
//! 2. **Derived, Not Stored**: the construction stage and the aspect pool
//!    are recomputed from the deck on every query.
//!
//! 3. **Advisory Aspects**: aspect compatibility is reported, never
//!    enforced. Only slot and copy limits refuse a card.
//!
//! ## Modules
//!
//! - `core`: rules configuration, errors, id generation
//! - `cards`: card definitions, aspects, catalog and sample data
//! - `deck`: deck state, statistics, export and share codes
//! - `rules`: validator and aspect compatibility
//! - `store`: in-memory saved decks
//! - `server`: mock REST service (feature `server`)
//!
//! ## Example
//!
//! ```
//! use swu_deckbuilder::{can_add, validate_deck, CardCatalog, CardId, DeckRules, DeckState};
//!
//! let catalog = CardCatalog::sample();
//! let vader = catalog.get(&CardId::new("1")).unwrap();
//!
//! let deck = DeckState::new("Dark Side").add_card(vader, &DeckRules::default()).unwrap();
//! assert!(!can_add(vader, &deck));
//!
//! let report = validate_deck(&deck);
//! assert!(!report.valid);
//! assert_eq!(report.completion_percent, 20.0);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod rules;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use crate::core::{CompletionWeights, DeckError, DeckRules, IdRng};

pub use crate::cards::{
    Aspect, AspectCount, Card, CardCatalog, CardId, CardQuery, CardType, Page, PageMeta,
};

pub use crate::deck::{DeckEntry, DeckExport, DeckList, DeckState, DeckStats};

pub use crate::rules::{
    aspect_summary, can_add, compatibility, validate_deck, AspectPool, Compatibility,
    DeckValidation, DeckValidator, Stage, StandardValidator, ValidationIssue,
};

pub use crate::store::{DeckCardUpdate, DeckStore, DeckUpdate, NewDeck, NewDeckCard, SavedDeck};
