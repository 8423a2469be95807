//! In-memory deck store.
//!
//! ## Ids
//!
//! New decks get a random 7-character base-36 id from an `IdRng`. Card
//! records are numbered from 1 within each deck.
//!
//! ## Persistence
//!
//! None. Decks live for the lifetime of the store, which starts with two
//! sample decks when built with `DeckStore::with_sample_decks`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::records::{
    records, DeckCardRecord, DeckCardUpdate, DeckUpdate, NewDeck, NewDeckCard, SavedDeck,
};
use crate::cards::{CardCatalog, CardId};
use crate::core::{DeckError, IdRng};

/// Owner assigned to every deck.
pub const DEFAULT_USER_ID: &str = "1";

/// Saved decks in insertion order.
#[derive(Clone, Debug)]
pub struct DeckStore {
    decks: Vec<SavedDeck>,
    catalog: Arc<CardCatalog>,
    rng: IdRng,
}

impl DeckStore {
    /// Empty store resolving cards through `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, rng: IdRng) -> Self {
        Self {
            decks: Vec::new(),
            catalog,
            rng,
        }
    }

    /// Store seeded with the sample decks.
    #[must_use]
    pub fn with_sample_decks(catalog: Arc<CardCatalog>, rng: IdRng) -> Self {
        let decks = sample_decks(&catalog);
        Self {
            decks,
            catalog,
            rng,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// All decks, oldest first.
    #[must_use]
    pub fn list(&self) -> &[SavedDeck] {
        &self.decks
    }

    pub fn get(&self, id: &str) -> Result<&SavedDeck, DeckError> {
        self.decks
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DeckError::DeckNotFound(id.to_string()))
    }

    /// Save a new deck. Every card id must be in the catalog.
    pub fn create(&mut self, request: NewDeck) -> Result<SavedDeck, DeckError> {
        let id = self.fresh_id();
        let cards = records(id.clone(), &request.cards, &self.catalog)?;
        let now = Utc::now();

        let deck = SavedDeck {
            id,
            name: request.name,
            description: request.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            user_id: DEFAULT_USER_ID.to_string(),
            cards,
        };

        info!(deck = %deck.id, name = %deck.name, cards = deck.cards.len(), "deck created");
        self.decks.push(deck.clone());
        Ok(deck)
    }

    /// Merge `update` into deck `id` and refresh `updated_at`.
    ///
    /// A new card list replaces the old one wholesale.
    pub fn update(&mut self, id: &str, update: DeckUpdate) -> Result<SavedDeck, DeckError> {
        let cards = match &update.cards {
            Some(cards) => Some(records(id.to_string(), cards, &self.catalog)?),
            None => None,
        };

        let deck = find_mut(&mut self.decks, id)?;

        if let Some(name) = update.name {
            deck.name = name;
        }
        if let Some(description) = update.description {
            deck.description = description;
        }
        if let Some(cards) = cards {
            deck.cards = cards;
        }
        deck.updated_at = Utc::now();

        info!(deck = %deck.id, "deck updated");
        Ok(deck.clone())
    }

    /// Remove deck `id`, returning it.
    pub fn delete(&mut self, id: &str) -> Result<SavedDeck, DeckError> {
        let pos = self
            .decks
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DeckError::DeckNotFound(id.to_string()))?;
        let deck = self.decks.remove(pos);
        info!(deck = %deck.id, "deck deleted");
        Ok(deck)
    }

    /// Add one card line to deck `deck_id`.
    ///
    /// A deck already holding the card gets that record overwritten with
    /// the new quantity and slot flags, so each card id keeps one record.
    pub fn upsert_card(
        &mut self,
        deck_id: &str,
        line: NewDeckCard,
    ) -> Result<DeckCardRecord, DeckError> {
        let deck = find_mut(&mut self.decks, deck_id)?;
        let card = self
            .catalog
            .get(&line.card_id)
            .cloned()
            .ok_or_else(|| DeckError::CardNotFound(line.card_id.clone()))?;

        let record = match deck.cards.iter_mut().find(|r| r.card_id == line.card_id) {
            Some(record) => {
                record.quantity = line.quantity;
                record.is_leader = line.is_leader;
                record.is_base = line.is_base;
                record.clone()
            }
            None => {
                let next = deck
                    .cards
                    .iter()
                    .filter_map(|r| r.id.parse::<u64>().ok())
                    .max()
                    .unwrap_or(0)
                    + 1;
                let record = DeckCardRecord {
                    id: next.to_string(),
                    deck_id: deck.id.clone(),
                    card_id: line.card_id,
                    quantity: line.quantity,
                    is_leader: line.is_leader,
                    is_base: line.is_base,
                    card: Some(card),
                };
                deck.cards.push(record.clone());
                record
            }
        };
        deck.updated_at = Utc::now();

        info!(deck = %deck.id, card = %record.card_id, quantity = record.quantity, "deck card saved");
        Ok(record)
    }

    /// Overwrite the record for `card_id` in deck `deck_id`.
    pub fn update_card(
        &mut self,
        deck_id: &str,
        card_id: &CardId,
        update: DeckCardUpdate,
    ) -> Result<DeckCardRecord, DeckError> {
        let deck = find_mut(&mut self.decks, deck_id)?;
        let record = deck
            .cards
            .iter_mut()
            .find(|r| &r.card_id == card_id)
            .ok_or_else(|| DeckError::NotInDeck(card_id.clone()))?;

        record.quantity = update.quantity;
        record.is_leader = update.is_leader;
        record.is_base = update.is_base;
        let record = record.clone();
        deck.updated_at = Utc::now();

        info!(deck = %deck.id, card = %card_id, quantity = record.quantity, "deck card updated");
        Ok(record)
    }

    /// Drop the record for `card_id` from deck `deck_id`, returning it.
    pub fn remove_card(
        &mut self,
        deck_id: &str,
        card_id: &CardId,
    ) -> Result<DeckCardRecord, DeckError> {
        let deck = find_mut(&mut self.decks, deck_id)?;
        let pos = deck
            .cards
            .iter()
            .position(|r| &r.card_id == card_id)
            .ok_or_else(|| DeckError::NotInDeck(card_id.clone()))?;
        let record = deck.cards.remove(pos);
        deck.updated_at = Utc::now();

        info!(deck = %deck.id, card = %card_id, "deck card removed");
        Ok(record)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.rng.next_id();
            if self.decks.iter().all(|d| d.id != id) {
                return id;
            }
            debug!(%id, "deck id collision");
        }
    }
}

fn find_mut<'a>(decks: &'a mut [SavedDeck], id: &str) -> Result<&'a mut SavedDeck, DeckError> {
    decks
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| DeckError::DeckNotFound(id.to_string()))
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn sample_record(
    catalog: &CardCatalog,
    id: &str,
    deck_id: &str,
    card_id: &str,
    quantity: u8,
    slot: (bool, bool),
) -> DeckCardRecord {
    let card_id = CardId::new(card_id);
    DeckCardRecord {
        id: id.to_string(),
        deck_id: deck_id.to_string(),
        card: catalog.get(&card_id).cloned(),
        card_id,
        quantity,
        is_leader: slot.0,
        is_base: slot.1,
    }
}

/// The two decks a fresh sample store starts with.
#[must_use]
pub fn sample_decks(catalog: &CardCatalog) -> Vec<SavedDeck> {
    const LEADER: (bool, bool) = (true, false);
    const BASE: (bool, bool) = (false, true);
    const MAIN: (bool, bool) = (false, false);

    vec![
        SavedDeck {
            id: "1".into(),
            name: "Vader's Command".into(),
            description: "A powerful Command deck centered around Vader".into(),
            // 2023-09-15T12:00:00Z
            created_at: at(1_694_779_200),
            updated_at: at(1_694_779_200),
            user_id: DEFAULT_USER_ID.into(),
            cards: vec![
                sample_record(catalog, "1", "1", "1", 1, LEADER),
                sample_record(catalog, "2", "1", "3", 1, BASE),
                sample_record(catalog, "3", "1", "5", 2, MAIN),
            ],
        },
        SavedDeck {
            id: "2".into(),
            name: "Luke's Heroism".into(),
            description: "A Heroism deck focused on Luke Skywalker".into(),
            // 2023-09-16T12:00:00Z
            created_at: at(1_694_865_600),
            updated_at: at(1_694_865_600),
            user_id: DEFAULT_USER_ID.into(),
            cards: vec![
                sample_record(catalog, "4", "2", "2", 1, LEADER),
                sample_record(catalog, "5", "2", "4", 1, MAIN),
            ],
        },
    ]
}
