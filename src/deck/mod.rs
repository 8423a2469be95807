//! Deck construction state and the views derived from it.
//!
//! - `DeckState`: immutable deck value with edit helpers
//! - `DeckStats`: counts by slot and type
//! - `DeckExport` / `DeckList`: export document and share codes

pub mod export;
pub mod state;
pub mod stats;

pub use export::{DeckExport, DeckList, ExportedCard};
pub use state::{DeckEntry, DeckState};
pub use stats::DeckStats;
