//! In-memory deck catalog.
//!
//! Decks are kept in catalog order with a name index for lookup. The
//! catalog file is a JSON array of deck documents:
//!
//! ```json
//! [
//!   { "name_of_deck": "base", "cards": [ { "name": "Wolf", "type": "ENEMY", ... } ] }
//! ]
//! ```
//!
//! Unknown document fields (such as `_id`) are ignored.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{DeckStore, StoreError};
use crate::cards::Deck;

/// Deck catalog held in memory.
///
/// ## Example
///
/// ```
/// use talisman_stats::cards::{Card, CardType, Deck};
/// use talisman_stats::store::{DeckStore, InMemoryDeckStore};
///
/// let deck = Deck::new("base").with_card(Card::new("Inn", CardType::Place));
/// let store = InMemoryDeckStore::from_decks(vec![deck]).unwrap();
///
/// assert_eq!(store.deck("base").unwrap().len(), 1);
/// assert!(store.deck("missing").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryDeckStore {
    decks: Vec<Deck>,
    index: FxHashMap<String, usize>,
}

impl InMemoryDeckStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from decks, rejecting duplicate names.
    pub fn from_decks(decks: impl IntoIterator<Item = Deck>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for deck in decks {
            store.insert_deck(deck)?;
        }
        Ok(store)
    }

    /// Parse a JSON catalog.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let decks: Vec<Deck> = serde_json::from_str(json)?;
        Self::from_decks(decks)
    }

    /// Load a JSON catalog from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StoreError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        let store = Self::from_json_str(&json)?;
        debug!(path = %path.display(), decks = store.len(), "loaded deck catalog");
        Ok(store)
    }

    /// Add a deck at the end of the catalog.
    ///
    /// Fails with `StoreError::DuplicateDeck` if the name is taken.
    pub fn insert_deck(&mut self, deck: Deck) -> Result<(), StoreError> {
        if self.index.contains_key(&deck.name) {
            return Err(StoreError::DuplicateDeck { deck: deck.name });
        }
        self.index.insert(deck.name.clone(), self.decks.len());
        self.decks.push(deck);
        Ok(())
    }

    /// Check if a deck name is known.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

impl DeckStore for InMemoryDeckStore {
    fn list_decks(&self) -> &[Deck] {
        &self.decks
    }

    fn deck(&self, name: &str) -> Result<&Deck, StoreError> {
        self.index
            .get(name)
            .map(|&i| &self.decks[i])
            .ok_or_else(|| StoreError::DeckNotFound {
                deck: name.to_string(),
            })
    }
}
