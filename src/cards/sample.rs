//! Built-in sample card set served by the mock card API.

use super::aspect::Aspect;
use super::definition::{Card, CardType};
use super::registry::CardCatalog;

const IMAGE_BASE: &str = "https://cdn.jsdelivr.net/gh/JimJafar/SWU-images@main/cards";

fn image(code: &str) -> String {
    format!("{IMAGE_BASE}/{code}.webp")
}

/// The eight sample cards, in catalog order.
#[must_use]
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card::new("1", "Darth Vader", CardType::Leader)
            .with_aspect(Aspect::Command, 1)
            .with_aspect(Aspect::Villainy, 1)
            .with_cost(5)
            .with_power(4)
            .with_health(4)
            .with_image_url(image("D20-001"))
            .with_text("Villainous. After you play a card, deal 1 damage to target undefeated unit."),
        Card::new("2", "Luke Skywalker", CardType::Leader)
            .with_aspect(Aspect::Heroism, 1)
            .with_aspect(Aspect::Force, 1)
            .with_cost(5)
            .with_power(3)
            .with_health(5)
            .with_image_url(image("D20-012"))
            .with_text("Valiant. After an opponent plays a card, heal 1 damage from target undefeated unit."),
        Card::new("3", "Death Star", CardType::Base)
            .with_aspect(Aspect::Command, 1)
            .with_cost(7)
            .with_health(10)
            .with_image_url(image("D20-018"))
            .with_text("Action: Deal 3 damage to all enemy units."),
        Card::new("4", "Millennium Falcon", CardType::Unit)
            .with_aspect(Aspect::Heroism, 1)
            .with_cost(4)
            .with_power(3)
            .with_health(4)
            .with_image_url(image("D20-023"))
            .with_text("Flying. Action: Move this unit to another arena."),
        Card::new("5", "Force Push", CardType::Event)
            .with_aspect(Aspect::Force, 1)
            .with_cost(2)
            .with_image_url(image("D20-030"))
            .with_text("Deal 2 damage to target unit and move it to another arena."),
        Card::new("6", "Stormtrooper Squad", CardType::Unit)
            .with_aspect(Aspect::Command, 1)
            .with_cost(3)
            .with_power(2)
            .with_health(2)
            .with_image_url(image("D20-035"))
            .with_text("Deploy: Deal 1 damage to target unit."),
        Card::new("7", "Rebel Trooper", CardType::Unit)
            .with_aspect(Aspect::Heroism, 1)
            .with_cost(2)
            .with_power(1)
            .with_health(3)
            .with_image_url(image("D20-040"))
            .with_text("Deploy: Draw a card if you control a Leader."),
        Card::new("8", "Emperor Palpatine", CardType::Leader)
            .with_aspect(Aspect::Villainy, 1)
            .with_aspect(Aspect::Force, 1)
            .with_cost(6)
            .with_power(3)
            .with_health(5)
            .with_image_url(image("D20-045"))
            .with_text("Deploy: Deal 2 damage to each enemy unit."),
    ]
}

impl CardCatalog {
    /// Catalog pre-loaded with the sample card set.
    #[must_use]
    pub fn sample() -> Self {
        sample_cards().into_iter().collect()
    }
}
