//! Deck and card lookups.

use tracing::{debug, warn};

use super::ApiError;
use crate::cards::{Card, CardType, Deck, FightType};
use crate::store::DeckStore;

/// Read-only catalog queries.
#[derive(Clone, Debug)]
pub struct DeckService<S> {
    store: S,
}

impl<S: DeckStore> DeckService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All decks, in catalog order.
    pub fn decks(&self) -> &[Deck] {
        let decks = self.store.list_decks();
        debug!(decks = decks.len(), "listing decks");
        decks
    }

    /// One deck by name.
    pub fn deck(&self, name: &str) -> Result<&Deck, ApiError> {
        debug!(deck = name, "fetching deck");
        self.store
            .deck(name)
            .inspect_err(|err| warn!(deck = name, %err, "deck lookup failed"))
            .map_err(ApiError::from)
    }

    /// First card with the given name in a deck.
    pub fn card(&self, deck: &str, card: &str) -> Result<&Card, ApiError> {
        debug!(deck, card, "fetching card");
        self.store
            .card_in_deck(deck, card)
            .inspect_err(|err| warn!(deck, card, %err, "card lookup failed"))
            .map_err(ApiError::from)
    }

    /// Cards of one type in a deck.
    pub fn cards_of_type(&self, deck: &str, card_type: CardType) -> Result<Vec<&Card>, ApiError> {
        debug!(deck, %card_type, "fetching cards of type");
        self.store
            .cards_of_type(deck, card_type)
            .inspect_err(|err| warn!(deck, %card_type, %err, "card type lookup failed"))
            .map_err(ApiError::from)
    }

    /// Enemies with exactly the given fight type.
    pub fn enemies_by_fight_type(
        &self,
        deck: &str,
        fight_type: FightType,
    ) -> Result<Vec<&Card>, ApiError> {
        debug!(deck, %fight_type, "fetching enemies by fight type");
        self.store
            .enemies_by_fight_type(deck, fight_type)
            .inspect_err(|err| warn!(deck, %fight_type, %err, "enemy lookup failed"))
            .map_err(ApiError::from)
    }
}
