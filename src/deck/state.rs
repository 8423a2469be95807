//! Deck state: the leaders, base, and main-deck cards under construction.
//!
//! `DeckState` is an immutable value. Every edit returns a new state and
//! leaves the original untouched; the `im` persistent vectors underneath
//! make that cheap. Validator functions take `&DeckState` and never see
//! hidden state.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, CardId};
use crate::core::{DeckError, DeckRules};
use crate::rules::validator::check_add;

/// A main-deck card and its copy count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card: Card,
    pub quantity: u8,
}

impl DeckEntry {
    #[must_use]
    pub fn new(card: Card, quantity: u8) -> Self {
        Self { card, quantity }
    }
}

/// Deck under construction.
///
/// ## Example
///
/// ```
/// use swu_deckbuilder::cards::{Aspect, Card, CardType};
/// use swu_deckbuilder::core::DeckRules;
/// use swu_deckbuilder::deck::DeckState;
///
/// let rules = DeckRules::default();
/// let vader = Card::new("1", "Darth Vader", CardType::Leader).with_aspect(Aspect::Villainy, 1);
/// let trooper = Card::new("6", "Stormtrooper Squad", CardType::Unit);
///
/// let empty = DeckState::new("Imperial March");
/// let deck = empty
///     .add_card(&vader, &rules).unwrap()
///     .add_card(&trooper, &rules).unwrap()
///     .add_card(&trooper, &rules).unwrap();
///
/// assert_eq!(deck.leader_count(), 1);
/// assert_eq!(deck.quantity(&trooper.id), 2);
/// assert_eq!(empty.card_count(), 0); // unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    name: String,
    leaders: Vector<Card>,
    /// At most one through `add_card`; assembled decks may carry more.
    bases: Vector<Card>,
    /// Main-deck entries in the order they were first added.
    cards: Vector<DeckEntry>,
}

impl DeckState {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Assemble a deck from parts without checking any limits.
    ///
    /// Used when loading decks saved elsewhere; `validate_deck` reports
    /// whatever the parts violate. Repeated leaders and bases are kept.
    /// Entries sharing a card id are merged into one, quantities summed.
    #[must_use]
    pub fn assemble(
        name: impl Into<String>,
        leaders: impl IntoIterator<Item = Card>,
        bases: impl IntoIterator<Item = Card>,
        cards: impl IntoIterator<Item = DeckEntry>,
    ) -> Self {
        let mut deck = Self {
            name: name.into(),
            leaders: leaders.into_iter().collect(),
            bases: bases.into_iter().collect(),
            cards: Vector::new(),
        };

        for entry in cards.into_iter().filter(|e| e.quantity > 0) {
            match deck.entry_index(&entry.card.id) {
                Some(i) => {
                    let merged = &mut deck.cards[i];
                    merged.quantity = merged.quantity.saturating_add(entry.quantity);
                }
                None => deck.cards.push_back(entry),
            }
        }
        deck
    }

    // === Queries ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected leaders, in selection order.
    pub fn leaders(&self) -> impl Iterator<Item = &Card> {
        self.leaders.iter()
    }

    #[must_use]
    pub fn leader_count(&self) -> usize {
        self.leaders.len()
    }

    #[must_use]
    pub fn has_leader(&self, id: &CardId) -> bool {
        self.leaders.iter().any(|c| &c.id == id)
    }

    /// A leader selected more than once, if any.
    #[must_use]
    pub fn repeated_leader(&self) -> Option<&Card> {
        self.leaders
            .iter()
            .enumerate()
            .find(|(i, c)| self.leaders.iter().take(*i).any(|p| p.id == c.id))
            .map(|(_, c)| c)
    }

    /// The selected base (the first, if several were assembled).
    #[must_use]
    pub fn base(&self) -> Option<&Card> {
        self.bases.front()
    }

    /// Every base, in selection order.
    pub fn bases(&self) -> impl Iterator<Item = &Card> {
        self.bases.iter()
    }

    #[must_use]
    pub fn base_count(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn has_base(&self) -> bool {
        !self.bases.is_empty()
    }

    /// Main-deck entries, in the order they were first added.
    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.cards.iter()
    }

    /// Copies of a main-deck card (0 if absent).
    #[must_use]
    pub fn quantity(&self, id: &CardId) -> u8 {
        self.cards
            .iter()
            .filter(|e| &e.card.id == id)
            .fold(0u8, |n, e| n.saturating_add(e.quantity))
    }

    /// Sum of main-deck quantities. Leaders and base are not counted.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.cards.iter().map(|e| u32::from(e.quantity)).sum()
    }

    /// True if the card is a leader, the base, or a main-deck entry.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.has_leader(id)
            || self.bases.iter().any(|b| &b.id == id)
            || self.entry_index(id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaders.is_empty() && self.bases.is_empty() && self.cards.is_empty()
    }

    fn entry_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|e| &e.card.id == id)
    }

    // === Edits (each returns a new state) ===

    /// Rename the deck.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.name = name.into();
        next
    }

    /// Add a card to the slot its type calls for.
    ///
    /// Leaders fill leader slots, a base fills the base slot, and any other
    /// card gains one copy. Refused with the same reasons `can_add` uses;
    /// aspect compatibility is never a reason.
    pub fn add_card(&self, card: &Card, rules: &DeckRules) -> Result<Self, DeckError> {
        check_add(card, self, rules)?;

        let mut next = self.clone();
        if card.is_leader() {
            next.leaders.push_back(card.clone());
        } else if card.is_base() {
            next.bases.push_back(card.clone());
        } else {
            match next.entry_index(&card.id) {
                Some(i) => {
                    let entry = &mut next.cards[i];
                    entry.quantity += 1;
                }
                None => next.cards.push_back(DeckEntry::new(card.clone(), 1)),
            }
        }

        debug!(deck = %next.name, card = %card.id, "card added");
        Ok(next)
    }

    /// Remove a leader, the base, or a main-deck entry with all its copies.
    pub fn remove_card(&self, id: &CardId) -> Result<Self, DeckError> {
        let mut next = self.clone();

        if let Some(i) = next.leaders.iter().position(|c| &c.id == id) {
            next.leaders.remove(i);
        } else if let Some(i) = next.bases.iter().position(|b| &b.id == id) {
            next.bases.remove(i);
        } else if let Some(i) = next.entry_index(id) {
            next.cards.remove(i);
        } else {
            return Err(DeckError::NotInDeck(id.clone()));
        }

        debug!(deck = %next.name, card = %id, "card removed");
        Ok(next)
    }

    /// Remove one copy of a main-deck card; the last copy removes the entry.
    ///
    /// Leaders and the base have a single copy, so this removes them.
    pub fn remove_copy(&self, id: &CardId) -> Result<Self, DeckError> {
        match self.entry_index(id) {
            Some(i) if self.cards[i].quantity > 1 => {
                let mut next = self.clone();
                next.cards[i].quantity -= 1;
                Ok(next)
            }
            _ => self.remove_card(id),
        }
    }

    /// Set the copy count of a main-deck card already in the deck.
    ///
    /// Zero removes the entry. Quantities above the copy limit are refused.
    pub fn set_quantity(&self, id: &CardId, quantity: u8, rules: &DeckRules) -> Result<Self, DeckError> {
        let i = self
            .entry_index(id)
            .ok_or_else(|| DeckError::NotInDeck(id.clone()))?;

        if quantity == 0 {
            return self.remove_card(id);
        }
        if quantity > rules.max_copies {
            return Err(DeckError::InvalidQuantity {
                card: id.clone(),
                quantity,
                max: rules.max_copies,
            });
        }

        let mut next = self.clone();
        next.cards[i].quantity = quantity;
        Ok(next)
    }

    /// Empty every slot, keeping the name.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::new(self.name.clone())
    }
}
