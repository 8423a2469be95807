//! Aspect pools and compatibility classification.
//!
//! A deck's aspect pool is the multiset of aspects its leaders and base
//! contribute, counted with multiplicity. A candidate card is compared
//! against that pool:
//!
//! - `Full`: every required aspect is present at least as many times
//! - `Partial`: some required aspect is present, but not enough
//! - `None`: no required aspect is present
//!
//! Cards with no aspects are always `Full`.

use serde::{Deserialize, Serialize};

use crate::cards::{Aspect, Card, ASPECT_COUNT};
use crate::deck::DeckState;

/// How well a card's aspects are covered by a deck's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Full,
    Partial,
    None,
}

impl Compatibility {
    /// True unless the card shares nothing with the pool.
    #[must_use]
    pub fn is_compatible(self) -> bool {
        self != Compatibility::None
    }
}

/// Multiset of aspects.
///
/// ## Example
///
/// ```
/// use swu_deckbuilder::cards::{Aspect, Card, CardType};
/// use swu_deckbuilder::rules::AspectPool;
///
/// let leader = Card::new("1", "Vader", CardType::Leader)
///     .with_aspect(Aspect::Command, 1)
///     .with_aspect(Aspect::Villainy, 1);
///
/// let pool = AspectPool::from_cards([&leader]);
/// assert_eq!(pool.count(Aspect::Command), 1);
/// assert_eq!(pool.count(Aspect::Force), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectPool {
    counts: [u32; ASPECT_COUNT],
}

impl AspectPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool of a single card's aspects.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self::from_cards([card])
    }

    /// Pool summed over several cards.
    #[must_use]
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut pool = Self::new();
        for card in cards {
            for ac in &card.aspects {
                pool.add(ac.aspect, u32::from(ac.count));
            }
        }
        pool
    }

    /// The pool contributed by a deck's leaders and base.
    #[must_use]
    pub fn from_deck(deck: &DeckState) -> Self {
        Self::from_cards(deck.leaders().chain(deck.bases()))
    }

    pub fn add(&mut self, aspect: Aspect, count: u32) {
        self.counts[aspect.index()] += count;
    }

    #[must_use]
    pub fn count(&self, aspect: Aspect) -> u32 {
        self.counts[aspect.index()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Aspects with a nonzero count, in `Aspect::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Aspect, u32)> + '_ {
        Aspect::ALL
            .into_iter()
            .map(|a| (a, self.count(a)))
            .filter(|&(_, c)| c > 0)
    }

    /// Classify `required` against this pool.
    #[must_use]
    pub fn covers(&self, required: &AspectPool) -> Compatibility {
        if required.is_empty() {
            return Compatibility::Full;
        }

        let mut all_covered = true;
        let mut any_overlap = false;
        for (aspect, needed) in required.iter() {
            let have = self.count(aspect);
            if have > 0 {
                any_overlap = true;
            }
            if have < needed {
                all_covered = false;
            }
        }

        if all_covered {
            Compatibility::Full
        } else if any_overlap {
            Compatibility::Partial
        } else {
            Compatibility::None
        }
    }
}

/// Classify a card against a deck's leader+base pool.
///
/// Pure: identical inputs always produce the identical result.
#[must_use]
pub fn compatibility(card: &Card, deck: &DeckState) -> Compatibility {
    AspectPool::from_deck(deck).covers(&AspectPool::from_card(card))
}

/// The deck's aspect pool as (aspect, count) pairs.
#[must_use]
pub fn aspect_summary(deck: &DeckState) -> Vec<(Aspect, u32)> {
    AspectPool::from_deck(deck).iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;

    fn pool(pairs: &[(Aspect, u32)]) -> AspectPool {
        let mut p = AspectPool::new();
        for &(a, c) in pairs {
            p.add(a, c);
        }
        p
    }

    #[test]
    fn test_empty_requirement_is_full() {
        assert_eq!(AspectPool::new().covers(&AspectPool::new()), Compatibility::Full);
    }

    #[test]
    fn test_classification() {
        let deck_pool = pool(&[(Aspect::Command, 3), (Aspect::Force, 1)]);

        assert_eq!(deck_pool.covers(&pool(&[(Aspect::Command, 2)])), Compatibility::Full);
        assert_eq!(deck_pool.covers(&pool(&[(Aspect::Command, 4)])), Compatibility::Partial);
        assert_eq!(deck_pool.covers(&pool(&[(Aspect::Villainy, 1)])), Compatibility::None);
        assert_eq!(
            deck_pool.covers(&pool(&[(Aspect::Force, 1), (Aspect::Villainy, 1)])),
            Compatibility::Partial
        );
    }

    #[test]
    fn test_empty_pool_versus_aspected_card() {
        assert_eq!(
            AspectPool::new().covers(&pool(&[(Aspect::Heroism, 1)])),
            Compatibility::None
        );
    }

    #[test]
    fn test_from_cards_counts_multiplicity() {
        let leader = Card::new("l", "L", CardType::Leader)
            .with_aspect(Aspect::Command, 1)
            .with_aspect(Aspect::Command, 1);
        let base = Card::new("b", "B", CardType::Base).with_aspect(Aspect::Command, 1);

        let p = AspectPool::from_cards([&leader, &base]);
        assert_eq!(p.count(Aspect::Command), 3);
    }

    #[test]
    fn test_iter_skips_zero_counts() {
        let p = pool(&[(Aspect::Cunning, 1), (Aspect::Command, 2)]);
        let pairs: Vec<_> = p.iter().collect();
        assert_eq!(pairs, vec![(Aspect::Command, 2), (Aspect::Cunning, 1)]);
    }

    #[test]
    fn test_compatibility_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Compatibility::Partial).unwrap(), "\"partial\"");
    }
}
