//! Deck statistics shown alongside the deck list.

use serde::{Deserialize, Serialize};

use super::state::DeckState;
use crate::cards::CardType;

/// Card counts by slot and type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Main-deck copies plus leaders plus base.
    pub total: u32,
    pub leaders: u32,
    pub bases: u32,
    pub units: u32,
    pub events: u32,
    pub upgrades: u32,
    pub epics: u32,
}

impl DeckStats {
    #[must_use]
    pub fn of(deck: &DeckState) -> Self {
        let mut stats = DeckStats {
            leaders: deck.leader_count() as u32,
            bases: deck.base_count() as u32,
            ..Self::default()
        };

        for entry in deck.entries() {
            let n = u32::from(entry.quantity);
            match entry.card.card_type {
                CardType::Unit => stats.units += n,
                CardType::Event => stats.events += n,
                CardType::Upgrade => stats.upgrades += n,
                CardType::Epic => stats.epics += n,
                _ => {}
            }
        }

        stats.total = deck.card_count() + stats.leaders + stats.bases;
        stats
    }
}
