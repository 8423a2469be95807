//! Deck construction rules.
//!
//! - `compatibility`: aspect pools and the full / partial / none fit
//! - `validator`: add-time legality, completeness, and stage
//!
//! Everything here is pure: functions take a `&DeckState` and return
//! values, so they can be re-run on every edit.

pub mod compatibility;
pub mod validator;

pub use compatibility::{aspect_summary, compatibility, AspectPool, Compatibility};
pub use validator::{
    can_add, check_add, validate_deck, DeckValidation, DeckValidator, Stage, StandardValidator,
    ValidationIssue,
};
