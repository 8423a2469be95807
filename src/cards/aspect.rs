//! Aspects - the colors a card belongs to.
//!
//! Leaders and bases contribute aspects to a deck's pool. Other cards
//! require aspects, and the validator compares the two multisets.
//!
//! ## Aspect Set
//!
//! The set is closed: Command, Heroism, Villainy, Force, Aggression,
//! Cunning, and Vigilance. Only the first six are advertised by the card
//! API; Vigilance parses but falls back to the neutral display color.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::DeckError;

/// A named gameplay color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Command,
    Heroism,
    Villainy,
    Force,
    Aggression,
    Cunning,
    Vigilance,
}

/// Number of aspects in the closed set.
pub const ASPECT_COUNT: usize = 7;

/// Display color for aspects without a dedicated one.
pub const NEUTRAL_COLOR: &str = "#7f8c8d";

impl Aspect {
    /// Every aspect, in declaration order.
    pub const ALL: [Aspect; ASPECT_COUNT] = [
        Aspect::Command,
        Aspect::Heroism,
        Aspect::Villainy,
        Aspect::Force,
        Aspect::Aggression,
        Aspect::Cunning,
        Aspect::Vigilance,
    ];

    /// The aspects listed by `GET /api/aspects`.
    pub const PRIMARY: [Aspect; 6] = [
        Aspect::Command,
        Aspect::Heroism,
        Aspect::Villainy,
        Aspect::Force,
        Aspect::Aggression,
        Aspect::Cunning,
    ];

    /// Canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Aspect::Command => "Command",
            Aspect::Heroism => "Heroism",
            Aspect::Villainy => "Villainy",
            Aspect::Force => "Force",
            Aspect::Aggression => "Aggression",
            Aspect::Cunning => "Cunning",
            Aspect::Vigilance => "Vigilance",
        }
    }

    /// Position in `Aspect::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Hex display color. Presentation only.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Aspect::Command => "#e74c3c",
            Aspect::Heroism => "#2ecc71",
            Aspect::Villainy => "#1c1c1c",
            Aspect::Force => "#3498db",
            Aspect::Aggression => "#e67e22",
            Aspect::Cunning => "#9b59b6",
            Aspect::Vigilance => NEUTRAL_COLOR,
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aspect {
    type Err = DeckError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Aspect::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DeckError::UnknownAspect(trimmed.to_string()))
    }
}

/// One (aspect, count) pair on a card.
///
/// Serialized as `{"aspect_name": "Command", "count": 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectCount {
    #[serde(rename = "aspect_name")]
    pub aspect: Aspect,
    #[serde(default = "one")]
    pub count: u8,
}

fn one() -> u8 {
    1
}

impl AspectCount {
    #[must_use]
    pub const fn new(aspect: Aspect, count: u8) -> Self {
        Self { aspect, count }
    }

    /// A single instance of `aspect`.
    #[must_use]
    pub const fn single(aspect: Aspect) -> Self {
        Self::new(aspect, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("command".parse::<Aspect>().unwrap(), Aspect::Command);
        assert_eq!(" HEROISM ".parse::<Aspect>().unwrap(), Aspect::Heroism);
        assert_eq!("Vigilance".parse::<Aspect>().unwrap(), Aspect::Vigilance);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Chaos".parse::<Aspect>().unwrap_err();
        assert!(matches!(err, DeckError::UnknownAspect(ref s) if s == "Chaos"));
    }

    #[test]
    fn test_colors() {
        assert_eq!(Aspect::Command.color(), "#e74c3c");
        assert_eq!(Aspect::Cunning.color(), "#9b59b6");
        assert_eq!(Aspect::Vigilance.color(), NEUTRAL_COLOR);
    }

    #[test]
    fn test_primary_excludes_vigilance() {
        assert_eq!(Aspect::PRIMARY.len(), 6);
        assert!(!Aspect::PRIMARY.contains(&Aspect::Vigilance));
    }

    #[test]
    fn test_aspect_count_serialization() {
        let ac = AspectCount::new(Aspect::Force, 2);
        let json = serde_json::to_string(&ac).unwrap();
        assert_eq!(json, r#"{"aspect_name":"Force","count":2}"#);

        let parsed: AspectCount = serde_json::from_str(r#"{"aspect_name":"Force"}"#).unwrap();
        assert_eq!(parsed, AspectCount::single(Aspect::Force));
    }
}
