//! Deck export document and share codes.
//!
//! ## Export
//!
//! The export document lists cards by name:
//!
//! ```json
//! { "name": "...", "leaders": ["..."], "base": "...", "cards": [{"name": "...", "quantity": 2}] }
//! ```
//!
//! ## Share Codes
//!
//! A share code is the deck's card ids, bincode-encoded and rendered as
//! URL-safe base64. Decoding needs a catalog to turn ids back into cards.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::state::{DeckEntry, DeckState};
use crate::cards::{CardCatalog, CardId};
use crate::core::DeckError;

/// One main-deck line in an export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedCard {
    pub name: String,
    pub quantity: u8,
}

/// Name-based deck export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckExport {
    pub name: String,
    pub leaders: Vec<String>,
    pub base: Option<String>,
    pub cards: Vec<ExportedCard>,
}

impl DeckExport {
    #[must_use]
    pub fn from_deck(deck: &DeckState) -> Self {
        Self {
            name: deck.name().to_string(),
            leaders: deck.leaders().map(|c| c.name.clone()).collect(),
            base: deck.base().map(|c| c.name.clone()),
            cards: deck
                .entries()
                .map(|e| ExportedCard {
                    name: e.card.name.clone(),
                    quantity: e.quantity,
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON, two-space indented.
    pub fn to_json_pretty(&self) -> Result<String, DeckError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Download file name: whitespace runs become `_`.
    #[must_use]
    pub fn file_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 5);
        let mut in_space = false;
        for ch in self.name.chars() {
            if ch.is_whitespace() {
                if !in_space {
                    out.push('_');
                }
                in_space = true;
            } else {
                out.push(ch);
                in_space = false;
            }
        }
        out.push_str(".json");
        out
    }
}

/// Compact id-based deck list carried by share codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    pub name: String,
    pub leaders: Vec<CardId>,
    pub bases: Vec<CardId>,
    pub cards: Vec<(CardId, u8)>,
}

impl DeckList {
    #[must_use]
    pub fn from_deck(deck: &DeckState) -> Self {
        Self {
            name: deck.name().to_string(),
            leaders: deck.leaders().map(|c| c.id.clone()).collect(),
            bases: deck.bases().map(|c| c.id.clone()).collect(),
            cards: deck.entries().map(|e| (e.card.id.clone(), e.quantity)).collect(),
        }
    }

    /// Encode as a URL-safe share code.
    pub fn to_share_code(&self) -> Result<String, DeckError> {
        let bytes =
            bincode::serialize(self).map_err(|e| DeckError::InvalidShareCode(e.to_string()))?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Decode a share code produced by `to_share_code`.
    pub fn from_share_code(code: &str) -> Result<Self, DeckError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(code.trim())
            .map_err(|e| DeckError::InvalidShareCode(e.to_string()))?;
        bincode::deserialize(&bytes).map_err(|e| DeckError::InvalidShareCode(e.to_string()))
    }

    /// Rebuild the deck from catalog cards.
    ///
    /// Limits are not re-checked; `validate_deck` reports them.
    pub fn resolve(&self, catalog: &CardCatalog) -> Result<DeckState, DeckError> {
        let lookup = |id: &CardId| {
            catalog
                .get(id)
                .cloned()
                .ok_or_else(|| DeckError::CardNotFound(id.clone()))
        };

        let leaders = self.leaders.iter().map(lookup).collect::<Result<Vec<_>, _>>()?;
        let bases = self.bases.iter().map(lookup).collect::<Result<Vec<_>, _>>()?;
        let cards = self
            .cards
            .iter()
            .map(|(id, qty)| lookup(id).map(|card| DeckEntry::new(card, *qty)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DeckState::assemble(self.name.clone(), leaders, bases, cards))
    }
}
