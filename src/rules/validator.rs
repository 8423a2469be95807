//! Deck validator: add-time legality, compatibility, and completeness.
//!
//! Validators answer three questions about a `DeckState`:
//! - May this card be added? (`can_add`)
//! - How well does it fit the deck's aspects? (`compatibility`)
//! - Is the deck complete, and how far along is it? (`validate_deck`)
//!
//! None of these fail. Refusals and incomplete decks are values.

use serde::{Deserialize, Serialize};

use super::compatibility::{self, Compatibility};
use crate::cards::Card;
use crate::core::{DeckError, DeckRules};
use crate::deck::DeckState;

/// Construction stage, derived from the deck's counts.
///
/// Never stored: `Stage::of` recomputes it so it cannot drift from the
/// slots it describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Leader slots still open.
    Leaders,
    /// Leaders chosen, base missing.
    Base,
    /// Leaders and base chosen; filling the main deck.
    Cards,
}

impl Stage {
    #[must_use]
    pub fn of(deck: &DeckState, rules: &DeckRules) -> Self {
        if deck.leader_count() < rules.leader_slots {
            Stage::Leaders
        } else if !deck.has_base() {
            Stage::Base
        } else {
            Stage::Cards
        }
    }
}

/// One unmet deck condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    TooManyLeaders { selected: usize, max: usize },
    DuplicateLeader { card: String },
    LeadersIncomplete { selected: usize, required: usize },
    TooManyBases { count: usize },
    BaseMissing,
    NotEnoughCards { count: u32, required: u32 },
    CopyLimitExceeded { card: String, quantity: u8, max: u8 },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::TooManyLeaders { selected, max } => {
                write!(f, "Too many leaders ({selected} selected, max {max})")
            }
            ValidationIssue::DuplicateLeader { card } => {
                write!(f, "{card} is selected as a leader more than once")
            }
            ValidationIssue::TooManyBases { count } => {
                write!(f, "Only one base is allowed ({count} selected)")
            }
            ValidationIssue::LeadersIncomplete { selected, required } => {
                write!(f, "Select {required} leaders ({selected}/{required} selected)")
            }
            ValidationIssue::BaseMissing => write!(f, "Select a base"),
            ValidationIssue::NotEnoughCards { count, required } => {
                write!(f, "Add at least {required} cards ({count}/{required} added)")
            }
            ValidationIssue::CopyLimitExceeded { card, quantity, max } => {
                write!(f, "{card} has {quantity} copies (max {max})")
            }
        }
    }
}

/// Result of `validate_deck`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckValidation {
    pub valid: bool,

    /// The highest-priority unmet condition, if any.
    pub issue: Option<ValidationIssue>,

    /// `issue` rendered for display. At most one message.
    pub reasons: Vec<String>,

    /// Weighted progress toward a complete deck, 0 to 100.
    pub completion_percent: f64,
}

impl DeckValidation {
    /// Completion rounded to a whole percentage.
    #[must_use]
    pub fn completion_rounded(&self) -> u8 {
        self.completion_percent.round().clamp(0.0, 100.0) as u8
    }
}

/// Refusal reason for adding `card`, if any.
///
/// Aspect compatibility is never a reason.
pub fn check_add(card: &Card, deck: &DeckState, rules: &DeckRules) -> Result<(), DeckError> {
    if card.is_leader() {
        if deck.has_leader(&card.id) {
            return Err(DeckError::DuplicateLeader(card.id.clone()));
        }
        if deck.leader_count() >= rules.leader_slots {
            return Err(DeckError::LeaderSlotsFull { max: rules.leader_slots });
        }
    } else if card.is_base() {
        if deck.has_base() {
            return Err(DeckError::BaseSlotFull);
        }
    } else if deck.quantity(&card.id) >= rules.max_copies {
        return Err(DeckError::CopyLimit {
            card: card.id.clone(),
            max: rules.max_copies,
        });
    }
    Ok(())
}

fn completion(deck: &DeckState, rules: &DeckRules) -> f64 {
    let w = &rules.weights;

    let leaders = if rules.leader_slots == 0 {
        1.0
    } else {
        deck.leader_count().min(rules.leader_slots) as f64 / rules.leader_slots as f64
    };
    let base = if deck.has_base() { 1.0 } else { 0.0 };
    let cards = if rules.min_deck_size == 0 {
        1.0
    } else {
        f64::from(deck.card_count().min(rules.min_deck_size)) / f64::from(rules.min_deck_size)
    };

    w.leaders * leaders + w.base * base + w.cards * cards
}

fn first_issue(deck: &DeckState, rules: &DeckRules) -> Option<ValidationIssue> {
    let selected = deck.leader_count();
    if selected > rules.leader_slots {
        return Some(ValidationIssue::TooManyLeaders {
            selected,
            max: rules.leader_slots,
        });
    }
    if let Some(card) = deck.repeated_leader() {
        return Some(ValidationIssue::DuplicateLeader {
            card: card.name.clone(),
        });
    }
    if selected < rules.leader_slots {
        return Some(ValidationIssue::LeadersIncomplete {
            selected,
            required: rules.leader_slots,
        });
    }
    match deck.base_count() {
        0 => return Some(ValidationIssue::BaseMissing),
        1 => {}
        count => return Some(ValidationIssue::TooManyBases { count }),
    }
    let count = deck.card_count();
    if count < rules.min_deck_size {
        return Some(ValidationIssue::NotEnoughCards {
            count,
            required: rules.min_deck_size,
        });
    }
    // Only reachable for decks assembled without add-time checks.
    deck.entries()
        .map(|e| (e, deck.quantity(&e.card.id)))
        .find(|&(_, quantity)| quantity > rules.max_copies)
        .map(|(e, quantity)| ValidationIssue::CopyLimitExceeded {
            card: e.card.name.clone(),
            quantity,
            max: rules.max_copies,
        })
}

/// Deck validator trait.
///
/// Implementors supply the rules; the default methods implement the
/// standard checks against them. Formats with extra restrictions override
/// `check_add` or `validate_deck` and keep the rest.
pub trait DeckValidator {
    /// The rules this validator enforces.
    fn rules(&self) -> &DeckRules;

    /// Refusal reason for adding `card`, if any.
    fn check_add(&self, card: &Card, deck: &DeckState) -> Result<(), DeckError> {
        check_add(card, deck, self.rules())
    }

    /// Whether `card` may be added to `deck`.
    fn can_add(&self, card: &Card, deck: &DeckState) -> bool {
        self.check_add(card, deck).is_ok()
    }

    /// Advisory aspect fit of `card` against the deck's pool.
    fn compatibility(&self, card: &Card, deck: &DeckState) -> Compatibility {
        compatibility::compatibility(card, deck)
    }

    /// Completeness check with weighted progress.
    ///
    /// Reports one unmet condition at a time, in priority order: leaders
    /// (too many, repeated, too few), base (missing or several), main-deck
    /// size, copy limit.
    fn validate_deck(&self, deck: &DeckState) -> DeckValidation {
        let issue = first_issue(deck, self.rules());
        DeckValidation {
            valid: issue.is_none(),
            reasons: issue.iter().map(ToString::to_string).collect(),
            issue,
            completion_percent: completion(deck, self.rules()),
        }
    }

    /// Current construction stage.
    fn stage(&self, deck: &DeckState) -> Stage {
        Stage::of(deck, self.rules())
    }

    /// Cards to offer in the browser.
    ///
    /// Main-deck cards with no aspect overlap are hidden unless
    /// `show_out_of_aspect` is set. Leaders and bases are never hidden, and
    /// nothing is hidden before the deck has any aspects to compare against.
    fn visible_cards<'a>(
        &self,
        cards: &'a [Card],
        deck: &DeckState,
        show_out_of_aspect: bool,
    ) -> Vec<&'a Card> {
        let pool = compatibility::AspectPool::from_deck(deck);
        if show_out_of_aspect || pool.is_empty() {
            return cards.iter().collect();
        }
        cards
            .iter()
            .filter(|c| {
                !c.is_main_deck()
                    || pool
                        .covers(&compatibility::AspectPool::from_card(c))
                        .is_compatible()
            })
            .collect()
    }
}

/// Validator for a fixed set of rules.
#[derive(Clone, Debug, Default)]
pub struct StandardValidator {
    rules: DeckRules,
}

impl StandardValidator {
    #[must_use]
    pub fn new(rules: DeckRules) -> Self {
        Self { rules }
    }
}

impl DeckValidator for StandardValidator {
    fn rules(&self) -> &DeckRules {
        &self.rules
    }
}

/// `can_add` under the standard rules.
#[must_use]
pub fn can_add(card: &Card, deck: &DeckState) -> bool {
    StandardValidator::default().can_add(card, deck)
}

/// `validate_deck` under the standard rules.
#[must_use]
pub fn validate_deck(deck: &DeckState) -> DeckValidation {
    StandardValidator::default().validate_deck(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Aspect, CardType};
    use crate::deck::DeckEntry;

    fn leader(id: &str, aspect: Aspect) -> Card {
        Card::new(id, format!("Leader {id}"), CardType::Leader).with_aspect(aspect, 1)
    }

    fn unit(id: &str, aspect: Aspect) -> Card {
        Card::new(id, format!("Unit {id}"), CardType::Unit).with_aspect(aspect, 1)
    }

    fn base() -> Card {
        Card::new("B", "Base", CardType::Base).with_aspect(Aspect::Command, 1)
    }

    #[test]
    fn test_stage_progression() {
        let rules = DeckRules::default();
        let mut deck = DeckState::new("Stages");
        assert_eq!(Stage::of(&deck, &rules), Stage::Leaders);

        deck = deck.add_card(&leader("L1", Aspect::Command), &rules).unwrap();
        assert_eq!(Stage::of(&deck, &rules), Stage::Leaders);

        deck = deck.add_card(&leader("L2", Aspect::Force), &rules).unwrap();
        assert_eq!(Stage::of(&deck, &rules), Stage::Base);

        deck = deck.add_card(&base(), &rules).unwrap();
        assert_eq!(Stage::of(&deck, &rules), Stage::Cards);

        // Removing a leader moves the stage back.
        deck = deck.remove_card(&"L1".into()).unwrap();
        assert_eq!(Stage::of(&deck, &rules), Stage::Leaders);
    }

    #[test]
    fn test_duplicate_leader_refused() {
        let rules = DeckRules::default();
        let l1 = leader("L1", Aspect::Command);
        let deck = DeckState::new("D").add_card(&l1, &rules).unwrap();

        assert!(!can_add(&l1, &deck));
        assert!(matches!(
            check_add(&l1, &deck, &rules),
            Err(DeckError::DuplicateLeader(_))
        ));
    }

    #[test]
    fn test_incompatible_card_can_still_be_added() {
        let rules = DeckRules::default();
        let deck = DeckState::new("D")
            .add_card(&leader("L1", Aspect::Heroism), &rules)
            .unwrap();
        let villain = unit("V", Aspect::Villainy);

        let validator = StandardValidator::default();
        assert_eq!(validator.compatibility(&villain, &deck), Compatibility::None);
        assert!(validator.can_add(&villain, &deck));
    }

    #[test]
    fn test_validate_priority_order() {
        let rules = DeckRules::default();
        let validator = StandardValidator::default();

        let empty = DeckState::new("D");
        let report = validator.validate_deck(&empty);
        assert!(!report.valid);
        assert_eq!(
            report.issue,
            Some(ValidationIssue::LeadersIncomplete { selected: 0, required: 2 })
        );
        assert_eq!(report.reasons, vec!["Select 2 leaders (0/2 selected)".to_string()]);

        let leaders = empty
            .add_card(&leader("L1", Aspect::Command), &rules)
            .unwrap()
            .add_card(&leader("L2", Aspect::Force), &rules)
            .unwrap();
        assert_eq!(
            validator.validate_deck(&leaders).issue,
            Some(ValidationIssue::BaseMissing)
        );

        let with_base = leaders.add_card(&base(), &rules).unwrap();
        assert_eq!(
            validator.validate_deck(&with_base).issue,
            Some(ValidationIssue::NotEnoughCards { count: 0, required: 10 })
        );
    }

    #[test]
    fn test_completion_partial_credit() {
        let rules = DeckRules::default();
        let validator = StandardValidator::default();

        let one_leader = DeckState::new("D")
            .add_card(&leader("L1", Aspect::Command), &rules)
            .unwrap();
        assert_eq!(validator.validate_deck(&one_leader).completion_percent, 20.0);

        let mut deck = one_leader.add_card(&base(), &rules).unwrap();
        assert_eq!(validator.validate_deck(&deck).completion_percent, 40.0);

        let card = unit("U", Aspect::Command);
        for _ in 0..3 {
            deck = deck.add_card(&card, &rules).unwrap();
        }
        let report = validator.validate_deck(&deck);
        assert!((report.completion_percent - 52.0).abs() < 1e-9);
        assert_eq!(report.completion_rounded(), 52);
    }

    #[test]
    fn test_card_progress_caps_at_minimum() {
        let validator = StandardValidator::default();
        let entries = (0..6).map(|i| DeckEntry::new(unit(&format!("U{i}"), Aspect::Force), 3));
        let deck = DeckState::assemble("Big", Vec::new(), Vec::new(), entries);

        assert_eq!(deck.card_count(), 18);
        assert_eq!(validator.validate_deck(&deck).completion_percent, 40.0);
    }

    #[test]
    fn test_assembled_over_limit_is_reported_last() {
        let deck = DeckState::assemble(
            "Loaded",
            vec![leader("L1", Aspect::Command), leader("L2", Aspect::Force)],
            Some(base()),
            vec![
                DeckEntry::new(unit("U1", Aspect::Command), 5),
                DeckEntry::new(unit("U2", Aspect::Command), 5),
            ],
        );

        let report = validate_deck(&deck);
        assert!(!report.valid);
        assert!(matches!(
            report.issue,
            Some(ValidationIssue::CopyLimitExceeded { quantity: 5, max: 3, .. })
        ));
        assert_eq!(report.completion_percent, 100.0);
    }

    fn filler(n: usize) -> Vec<DeckEntry> {
        (0..n)
            .map(|i| DeckEntry::new(unit(&format!("F{i}"), Aspect::Command), 2))
            .collect()
    }

    #[test]
    fn test_repeated_leader_is_reported() {
        let deck = DeckState::assemble(
            "Dup",
            vec![leader("L1", Aspect::Command), leader("L1", Aspect::Command)],
            Some(base()),
            filler(5),
        );

        let report = validate_deck(&deck);
        assert!(!report.valid);
        assert_eq!(
            report.issue,
            Some(ValidationIssue::DuplicateLeader { card: "Leader L1".into() })
        );
    }

    #[test]
    fn test_split_entries_count_toward_copy_limit() {
        let x = unit("X", Aspect::Command);
        let deck = DeckState::assemble(
            "Split",
            vec![leader("L1", Aspect::Command), leader("L2", Aspect::Force)],
            Some(base()),
            vec![
                DeckEntry::new(x.clone(), 3),
                DeckEntry::new(x.clone(), 3),
                DeckEntry::new(unit("Y", Aspect::Command), 3),
                DeckEntry::new(unit("Z", Aspect::Command), 1),
            ],
        );

        assert_eq!(deck.quantity(&x.id), 6);
        let report = validate_deck(&deck);
        assert!(!report.valid);
        assert_eq!(
            report.issue,
            Some(ValidationIssue::CopyLimitExceeded {
                card: "Unit X".into(),
                quantity: 6,
                max: 3,
            })
        );
    }

    #[test]
    fn test_too_many_leaders_message() {
        let deck = DeckState::assemble(
            "Crowded",
            vec![
                leader("L1", Aspect::Command),
                leader("L2", Aspect::Force),
                leader("L3", Aspect::Cunning),
            ],
            Some(base()),
            filler(5),
        );

        let report = validate_deck(&deck);
        assert_eq!(
            report.issue,
            Some(ValidationIssue::TooManyLeaders { selected: 3, max: 2 })
        );
        assert_eq!(report.reasons, vec!["Too many leaders (3 selected, max 2)".to_string()]);
    }

    #[test]
    fn test_second_base_is_reported() {
        let deck = DeckState::assemble(
            "Two Bases",
            vec![leader("L1", Aspect::Command), leader("L2", Aspect::Force)],
            vec![base(), Card::new("B2", "Other Base", CardType::Base)],
            filler(5),
        );

        let report = validate_deck(&deck);
        assert_eq!(report.issue, Some(ValidationIssue::TooManyBases { count: 2 }));
        assert_eq!(report.completion_percent, 100.0);
    }

    #[test]
    fn test_zero_leader_slots_from_config() {
        let rules: DeckRules = serde_json::from_value(serde_json::json!({
            "leader_slots": 0,
            "max_copies": 3,
            "min_deck_size": 0,
            "weights": { "leaders": 40.0, "base": 20.0, "cards": 40.0 }
        }))
        .unwrap();
        let validator = StandardValidator::new(rules);

        let report = validator.validate_deck(&DeckState::new("Empty"));
        assert!(report.completion_percent.is_finite());
        assert_eq!(report.completion_percent, 80.0);
        assert_eq!(report.issue, Some(ValidationIssue::BaseMissing));
    }

    #[test]
    fn test_custom_rules() {
        let rules = DeckRules::default().with_leader_slots(1).with_min_deck_size(2);
        let validator = StandardValidator::new(rules.clone());

        let deck = DeckState::new("Solo")
            .add_card(&leader("L1", Aspect::Cunning), &rules)
            .unwrap()
            .add_card(&base(), &rules)
            .unwrap()
            .add_card(&unit("U", Aspect::Cunning), &rules)
            .unwrap()
            .add_card(&unit("U", Aspect::Cunning), &rules)
            .unwrap();

        let report = validator.validate_deck(&deck);
        assert!(report.valid);
        assert_eq!(report.completion_percent, 100.0);
        assert!(!validator.can_add(&leader("L2", Aspect::Force), &deck));
    }

    #[test]
    fn test_visible_cards() {
        let rules = DeckRules::default();
        let validator = StandardValidator::default();
        let cards = vec![
            leader("L9", Aspect::Villainy),
            unit("H", Aspect::Heroism),
            unit("C", Aspect::Command),
            Card::new("N", "Neutral", CardType::Event),
        ];

        let empty = DeckState::new("D");
        assert_eq!(validator.visible_cards(&cards, &empty, false).len(), 4);

        let deck = empty.add_card(&leader("L1", Aspect::Command), &rules).unwrap();
        let shown: Vec<_> = validator
            .visible_cards(&cards, &deck, false)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(shown, vec!["L9", "C", "N"]);

        assert_eq!(validator.visible_cards(&cards, &deck, true).len(), 4);
    }
}
