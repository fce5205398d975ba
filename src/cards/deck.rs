//! Decks - named, ordered card lists.

use serde::{Deserialize, Serialize};

use super::definition::Card;
use super::kinds::{CardType, FightType};

/// A named deck of cards.
///
/// Card order is insertion order and has no statistical meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck name, the external lookup key.
    #[serde(rename = "name_of_deck")]
    pub name: String,

    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Add a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Add several cards (builder pattern).
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards.extend(cards);
        self
    }

    /// Cards of one type, in deck order.
    pub fn cards_of_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.card_type == card_type)
    }

    /// Enemies with exactly the given fight type, in deck order.
    ///
    /// A `StrengthAndPower` enemy is only returned for `StrengthAndPower`.
    pub fn enemies_with(&self, fight_type: FightType) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(move |c| c.is_enemy() && c.fight_type == Some(fight_type))
    }

    /// First card with the given name.
    #[must_use]
    pub fn find_card(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// Sum of copies over all entries.
    #[must_use]
    pub fn total_copies(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.copies)).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deck() -> Deck {
        Deck::new("base")
            .with_card(Card::new("Wolf", CardType::Enemy).with_fight(FightType::Strength, "2"))
            .with_card(Card::new("Spirit", CardType::Enemy).with_fight(FightType::Power, "4"))
            .with_card(
                Card::new("Demon", CardType::Enemy)
                    .with_fight(FightType::StrengthAndPower, "6")
                    .with_copies(2),
            )
            .with_card(Card::new("Chapel", CardType::Place).with_copies(3))
    }

    #[test]
    fn test_cards_of_type() {
        let deck = sample_deck();
        assert_eq!(deck.cards_of_type(CardType::Enemy).count(), 3);
        assert_eq!(deck.cards_of_type(CardType::Place).count(), 1);
        assert_eq!(deck.cards_of_type(CardType::Item).count(), 0);
    }

    #[test]
    fn test_enemies_with_exact_match() {
        let deck = sample_deck();
        let strength: Vec<_> = deck.enemies_with(FightType::Strength).map(|c| &c.name).collect();
        assert_eq!(strength, vec!["Wolf"]);

        let merged: Vec<_> = deck
            .enemies_with(FightType::StrengthAndPower)
            .map(|c| &c.name)
            .collect();
        assert_eq!(merged, vec!["Demon"]);
    }

    #[test]
    fn test_find_card_returns_first() {
        let deck = sample_deck().with_card(Card::new("Wolf", CardType::Follower));
        let found = deck.find_card("Wolf").unwrap();
        assert_eq!(found.card_type, CardType::Enemy);
        assert!(deck.find_card("Dragon").is_none());
    }

    #[test]
    fn test_total_copies() {
        let deck = sample_deck();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.total_copies(), 7);
        assert!(Deck::new("empty").is_empty());
    }

    #[test]
    fn test_deck_serialization() {
        let deck = sample_deck();
        let json = serde_json::to_string(&deck).unwrap();
        assert!(json.contains("\"name_of_deck\":\"base\""));

        let deserialized: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
