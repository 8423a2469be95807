//! Saved deck records and the request shapes that create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, CardCatalog, CardId};
use crate::core::DeckError;
use crate::deck::{DeckEntry, DeckState};

/// A card line inside a saved deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCardRecord {
    pub id: String,
    pub deck_id: String,
    pub card_id: CardId,
    pub quantity: u8,
    pub is_leader: bool,
    pub is_base: bool,
    /// Embedded card data, when the record carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
}

/// A deck as stored and served by the deck API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDeck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
    pub cards: Vec<DeckCardRecord>,
}

impl SavedDeck {
    /// Sum of all quantities, leaders and base included.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.quantity)).sum()
    }

    /// Rebuild the deck under construction.
    ///
    /// Records without embedded card data are resolved through `catalog`.
    /// Each record goes to the slot its card type calls for; the
    /// `is_leader` and `is_base` flags are not trusted. Leader and base
    /// records contribute one card per copy, so repeated slots stay
    /// visible to `validate_deck`.
    pub fn to_state(&self, catalog: &CardCatalog) -> Result<DeckState, DeckError> {
        let mut leaders = Vec::new();
        let mut bases = Vec::new();
        let mut entries = Vec::new();

        for record in &self.cards {
            let card = match &record.card {
                Some(card) => card.clone(),
                None => catalog
                    .get(&record.card_id)
                    .cloned()
                    .ok_or_else(|| DeckError::CardNotFound(record.card_id.clone()))?,
            };

            if record.is_leader != card.is_leader() || record.is_base != card.is_base() {
                debug!(
                    deck = %self.id,
                    card = %card.id,
                    card_type = %card.card_type,
                    "slot flags disagree with card type"
                );
            }

            let copies = usize::from(record.quantity);
            if card.is_leader() {
                leaders.extend(std::iter::repeat(card).take(copies));
            } else if card.is_base() {
                bases.extend(std::iter::repeat(card).take(copies));
            } else {
                entries.push(DeckEntry::new(card, record.quantity));
            }
        }

        Ok(DeckState::assemble(self.name.clone(), leaders, bases, entries))
    }
}

fn one() -> u8 {
    1
}

/// A card line in a create or update request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeckCard {
    pub card_id: CardId,
    #[serde(default = "one")]
    pub quantity: u8,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default)]
    pub is_base: bool,
}

/// Body of `POST /api/decks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeck {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cards: Vec<NewDeckCard>,
}

impl NewDeck {
    /// Request that saves `deck` as-is.
    #[must_use]
    pub fn from_state(deck: &DeckState, description: Option<String>) -> Self {
        let leaders = deck.leaders().map(|c| NewDeckCard {
            card_id: c.id.clone(),
            quantity: 1,
            is_leader: true,
            is_base: false,
        });
        let bases = deck.bases().map(|c| NewDeckCard {
            card_id: c.id.clone(),
            quantity: 1,
            is_leader: false,
            is_base: true,
        });
        let cards = deck.entries().map(|e| NewDeckCard {
            card_id: e.card.id.clone(),
            quantity: e.quantity,
            is_leader: false,
            is_base: false,
        });

        Self {
            name: deck.name().to_string(),
            description,
            cards: leaders.chain(bases).chain(cards).collect(),
        }
    }

    /// Resolve card ids into a deck under construction.
    pub fn to_state(&self, catalog: &CardCatalog) -> Result<DeckState, DeckError> {
        let saved = SavedDeck {
            id: String::new(),
            name: self.name.clone(),
            description: String::new(),
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
            user_id: String::new(),
            cards: records(String::new(), &self.cards, catalog)?,
        };
        saved.to_state(catalog)
    }
}

/// Body of `PUT /api/decks/{id}/cards/{card_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCardUpdate {
    #[serde(default = "one")]
    pub quantity: u8,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default)]
    pub is_base: bool,
}

/// Body of `PUT /api/decks/{id}`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cards: Option<Vec<NewDeckCard>>,
}

/// Build card records for `deck_id`, embedding catalog card data.
///
/// Fails on the first card id the catalog does not know.
pub(crate) fn records(
    deck_id: String,
    cards: &[NewDeckCard],
    catalog: &CardCatalog,
) -> Result<Vec<DeckCardRecord>, DeckError> {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let card = catalog
                .get(&c.card_id)
                .ok_or_else(|| DeckError::CardNotFound(c.card_id.clone()))?;
            Ok(DeckCardRecord {
                id: (i + 1).to_string(),
                deck_id: deck_id.clone(),
                card_id: c.card_id.clone(),
                quantity: c.quantity,
                is_leader: c.is_leader,
                is_base: c.is_base,
                card: Some(card.clone()),
            })
        })
        .collect()
}
