//! Deck construction configuration.
//!
//! `DeckRules` carries the format's numeric limits and the weights used
//! for the completion percentage. The validator never hardcodes these;
//! `DeckRules::default()` is the standard premier format.

use serde::{Deserialize, Serialize};

/// Leaders per deck in the standard format.
pub const STANDARD_LEADER_SLOTS: usize = 2;
/// Copies of a single main-deck card.
pub const STANDARD_MAX_COPIES: u8 = 3;
/// Main-deck cards required for a legal deck.
pub const STANDARD_MIN_DECK_SIZE: u32 = 10;

/// How the completion percentage is split between deck sections.
///
/// Weights are percentage points and should sum to 100.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletionWeights {
    pub leaders: f64,
    pub base: f64,
    pub cards: f64,
}

impl Default for CompletionWeights {
    fn default() -> Self {
        Self {
            leaders: 40.0,
            base: 20.0,
            cards: 40.0,
        }
    }
}

impl CompletionWeights {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.leaders + self.base + self.cards
    }
}

/// Deck construction rules.
///
/// A deck always has exactly one base slot; leaders, copies, and size vary
/// by format.
///
/// ## Example
///
/// ```
/// use swu_deckbuilder::core::DeckRules;
///
/// let rules = DeckRules::default();
/// assert_eq!(rules.leader_slots, 2);
///
/// let casual = DeckRules::default().with_min_deck_size(5).with_max_copies(4);
/// assert_eq!(casual.min_deck_size, 5);
/// assert_eq!(casual.max_copies, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckRules {
    /// Number of leaders a complete deck has.
    pub leader_slots: usize,

    /// Maximum copies of one main-deck card.
    pub max_copies: u8,

    /// Minimum sum of main-deck quantities.
    pub min_deck_size: u32,

    pub weights: CompletionWeights,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            leader_slots: STANDARD_LEADER_SLOTS,
            max_copies: STANDARD_MAX_COPIES,
            min_deck_size: STANDARD_MIN_DECK_SIZE,
            weights: CompletionWeights::default(),
        }
    }
}

impl DeckRules {
    /// Create the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of leader slots.
    #[must_use]
    pub fn with_leader_slots(mut self, slots: usize) -> Self {
        assert!(slots > 0, "Must have at least 1 leader slot");
        self.leader_slots = slots;
        self
    }

    /// Set the per-card copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, max: u8) -> Self {
        assert!(max > 0, "Copy limit must be at least 1");
        self.max_copies = max;
        self
    }

    /// Set the minimum main-deck size.
    #[must_use]
    pub fn with_min_deck_size(mut self, size: u32) -> Self {
        self.min_deck_size = size;
        self
    }

    /// Set the completion weights.
    #[must_use]
    pub fn with_weights(mut self, weights: CompletionWeights) -> Self {
        self.weights = weights;
        self
    }
}
