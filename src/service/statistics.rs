//! Statistics queries: one method per statistics endpoint.
//!
//! | method | route |
//! |---|---|
//! | `unique_stats` | `/api/statistics/unique` |
//! | `unique_stats_for_deck` | `/api/statistics/unique/{deck}` |
//! | `total_stats` | `/api/statistics/all` |
//! | `total_stats_for_deck` | `/api/statistics/all/{deck}` |
//! | `enemy_stats` | `/api/statistics/all/{deck}/enemies` |
//! | `enemy_power_breakdown` | `/api/statistics/enemies/{deck}` |

use tracing::{debug, warn};

use super::ApiError;
use crate::cards::CardType;
use crate::stats::{
    aggregate, aggregate_decks, breakdown, summarize, CategoryStats, CombatStats, CountMode,
    PowerBreakdownEntry,
};
use crate::store::DeckStore;

/// Statistics over a deck catalog.
///
/// ## Example
///
/// ```
/// use talisman_stats::cards::{Card, CardType, Deck};
/// use talisman_stats::service::StatisticsService;
/// use talisman_stats::store::InMemoryDeckStore;
///
/// let deck = Deck::new("base").with_card(Card::new("Wolf", CardType::Enemy).with_copies(3));
/// let service = StatisticsService::new(InMemoryDeckStore::from_decks(vec![deck]).unwrap());
///
/// assert_eq!(service.unique_stats().number_of_enemies, 1);
/// assert_eq!(service.total_stats().number_of_enemies, 3);
/// ```
#[derive(Clone, Debug)]
pub struct StatisticsService<S> {
    store: S,
    workers: usize,
}

impl<S: DeckStore> StatisticsService<S> {
    /// Create a service that aggregates decks on the calling thread.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store, workers: 1 }
    }

    /// Set the worker threads used for cross-deck statistics.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Entry counts across every deck.
    pub fn unique_stats(&self) -> CategoryStats {
        self.catalog_stats(CountMode::Distinct)
    }

    /// Copy counts across every deck.
    pub fn total_stats(&self) -> CategoryStats {
        self.catalog_stats(CountMode::Total)
    }

    /// Entry counts for one deck.
    pub fn unique_stats_for_deck(&self, deck: &str) -> Result<CategoryStats, ApiError> {
        self.deck_stats(deck, CountMode::Distinct)
    }

    /// Copy counts for one deck.
    pub fn total_stats_for_deck(&self, deck: &str) -> Result<CategoryStats, ApiError> {
        self.deck_stats(deck, CountMode::Total)
    }

    /// Category counts for one deck in the given mode.
    pub fn deck_stats(&self, deck: &str, mode: CountMode) -> Result<CategoryStats, ApiError> {
        debug!(deck, ?mode, "deck statistics");
        let found = self
            .store
            .deck(deck)
            .inspect_err(|err| warn!(deck, %err, "deck statistics failed"))?;
        Ok(aggregate(&found.cards, mode))
    }

    /// Combat summary of a deck's enemies.
    pub fn enemy_stats(&self, deck: &str) -> Result<CombatStats, ApiError> {
        debug!(deck, "enemy statistics");
        let result = self
            .store
            .cards_of_type(deck, CardType::Enemy)
            .map_err(ApiError::from)
            .and_then(|enemies| summarize(enemies).map_err(ApiError::from));
        result.inspect_err(|err| warn!(deck, %err, "enemy statistics failed"))
    }

    /// Enemy copies per literal fight power.
    pub fn enemy_power_breakdown(&self, deck: &str) -> Result<Vec<PowerBreakdownEntry>, ApiError> {
        debug!(deck, "enemy power breakdown");
        let enemies = self
            .store
            .cards_of_type(deck, CardType::Enemy)
            .inspect_err(|err| warn!(deck, %err, "enemy power breakdown failed"))?;
        Ok(breakdown(enemies))
    }

    fn catalog_stats(&self, mode: CountMode) -> CategoryStats {
        let decks = self.store.list_decks();
        debug!(decks = decks.len(), workers = self.workers, ?mode, "catalog statistics");
        aggregate_decks(decks, mode, self.workers)
    }
}
