//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a printed card: its type,
//! the aspects it carries, and its optional numeric stats. Deck-specific
//! data (how many copies, which slot) lives in `DeckState`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::aspect::{Aspect, AspectCount};

/// Unique identifier for a card.
///
/// Card ids are opaque strings ("1", "SOR-010", ...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Card type.
///
/// Leader and Base occupy the deck's special slots; everything else goes
/// into the main deck. Unrecognised type names are kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Leader,
    Base,
    Unit,
    Event,
    Upgrade,
    Plot,
    Epic,
    Other(String),
}

impl CardType {
    /// The type names listed by `GET /api/types`.
    pub const LISTED: [CardType; 6] = [
        CardType::Leader,
        CardType::Base,
        CardType::Unit,
        CardType::Event,
        CardType::Plot,
        CardType::Upgrade,
    ];

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            CardType::Leader => "Leader",
            CardType::Base => "Base",
            CardType::Unit => "Unit",
            CardType::Event => "Event",
            CardType::Upgrade => "Upgrade",
            CardType::Plot => "Plot",
            CardType::Epic => "Epic",
            CardType::Other(name) => name,
        }
    }

    /// Case-insensitive comparison against a type name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name.trim())
    }
}

impl From<String> for CardType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Leader" => CardType::Leader,
            "Base" => CardType::Base,
            "Unit" => CardType::Unit,
            "Event" => CardType::Event,
            "Upgrade" => CardType::Upgrade,
            "Plot" => CardType::Plot,
            "Epic" => CardType::Epic,
            _ => CardType::Other(s),
        }
    }
}

impl From<CardType> for String {
    fn from(t: CardType) -> Self {
        match t {
            CardType::Other(name) => name,
            other => other.name().to_string(),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use swu_deckbuilder::cards::{Aspect, Card, CardType};
///
/// let vader = Card::new("1", "Darth Vader", CardType::Leader)
///     .with_aspect(Aspect::Command, 1)
///     .with_aspect(Aspect::Villainy, 1)
///     .with_cost(5);
///
/// assert!(vader.is_leader());
/// assert_eq!(vader.aspect_count(Aspect::Command), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Ordered (aspect, count) pairs. Empty for neutral cards.
    #[serde(default)]
    pub aspects: SmallVec<[AspectCount; 2]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Card {
    /// Create a card with no aspects or stats.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            subtitle: None,
            card_type,
            aspects: SmallVec::new(),
            cost: None,
            power: None,
            health: None,
            text: None,
            image_url: None,
        }
    }

    /// Append an aspect requirement/contribution (builder pattern).
    #[must_use]
    pub fn with_aspect(mut self, aspect: Aspect, count: u8) -> Self {
        self.aspects.push(AspectCount::new(aspect, count));
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u8) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: u16) -> Self {
        self.power = Some(power);
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: u16) -> Self {
        self.health = Some(health);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn is_leader(&self) -> bool {
        self.card_type == CardType::Leader
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.card_type == CardType::Base
    }

    /// True for cards that go into the main deck (not a leader or base).
    #[must_use]
    pub fn is_main_deck(&self) -> bool {
        !self.is_leader() && !self.is_base()
    }

    /// Cards without aspects are compatible with every deck.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.aspects.iter().all(|a| a.count == 0)
    }

    /// Total count of `aspect` on this card, summing repeated entries.
    #[must_use]
    pub fn aspect_count(&self, aspect: Aspect) -> u32 {
        self.aspects
            .iter()
            .filter(|a| a.aspect == aspect)
            .map(|a| u32::from(a.count))
            .sum()
    }

    #[must_use]
    pub fn has_aspect(&self, aspect: Aspect) -> bool {
        self.aspect_count(aspect) > 0
    }
}
