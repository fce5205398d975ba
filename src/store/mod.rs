//! Deck storage and card lookup.
//!
//! `DeckStore` is the seam between the statistics services and wherever
//! decks live. Every lookup either returns data or a `StoreError` naming
//! the key that matched nothing; filters that match no card are reported
//! as "not found" rather than as an empty collection.
//!
//! `InMemoryDeckStore` is the implementation backed by a JSON catalog.

pub mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::cards::{Card, CardType, Deck, FightType};

pub use memory::InMemoryDeckStore;

/// Read access to a deck catalog.
///
/// Implementors provide `list_decks` and `deck`; the filtered lookups have
/// default implementations in terms of those two.
pub trait DeckStore {
    /// All decks, in catalog order.
    fn list_decks(&self) -> &[Deck];

    /// Look up a deck by name.
    fn deck(&self, name: &str) -> Result<&Deck, StoreError>;

    /// First card named `card` in deck `deck`.
    fn card_in_deck(&self, deck: &str, card: &str) -> Result<&Card, StoreError> {
        self.deck(deck)?
            .find_card(card)
            .ok_or_else(|| StoreError::CardNotFound {
                deck: deck.to_string(),
                card: card.to_string(),
            })
    }

    /// Cards of one type in a deck, in deck order.
    fn cards_of_type(&self, deck: &str, card_type: CardType) -> Result<Vec<&Card>, StoreError> {
        let cards: Vec<_> = self.deck(deck)?.cards_of_type(card_type).collect();
        if cards.is_empty() {
            return Err(StoreError::CardsOfTypeNotFound {
                deck: deck.to_string(),
                card_type,
            });
        }
        Ok(cards)
    }

    /// Enemies in a deck whose fight type is exactly `fight_type`.
    fn enemies_by_fight_type(
        &self,
        deck: &str,
        fight_type: FightType,
    ) -> Result<Vec<&Card>, StoreError> {
        let cards: Vec<_> = self.deck(deck)?.enemies_with(fight_type).collect();
        if cards.is_empty() {
            return Err(StoreError::EnemiesNotFound {
                deck: deck.to_string(),
                fight_type,
            });
        }
        Ok(cards)
    }
}

impl<T: DeckStore + ?Sized> DeckStore for &T {
    fn list_decks(&self) -> &[Deck] {
        (**self).list_decks()
    }

    fn deck(&self, name: &str) -> Result<&Deck, StoreError> {
        (**self).deck(name)
    }
}

impl<T: DeckStore + ?Sized> DeckStore for Arc<T> {
    fn list_decks(&self) -> &[Deck] {
        (**self).list_decks()
    }

    fn deck(&self, name: &str) -> Result<&Deck, StoreError> {
        (**self).deck(name)
    }
}

/// Errors raised by deck lookups and catalog loading.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Deck: {deck} not found!")]
    DeckNotFound { deck: String },
    #[error("Card: {card} in deck: {deck} not found!")]
    CardNotFound { deck: String, card: String },
    #[error("Cards of type: {card_type} in deck: {deck} not found!")]
    CardsOfTypeNotFound { deck: String, card_type: CardType },
    #[error("Enemies of type: {fight_type} in deck: {deck} not found!")]
    EnemiesNotFound { deck: String, fight_type: FightType },
    #[error("Deck: {deck} already exists!")]
    DuplicateDeck { deck: String },
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse catalog: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Check if this error means a lookup key matched nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::DeckNotFound { .. }
                | StoreError::CardNotFound { .. }
                | StoreError::CardsOfTypeNotFound { .. }
                | StoreError::EnemiesNotFound { .. }
        )
    }
}
