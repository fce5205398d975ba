//! Folding category records across decks.
//!
//! `CategoryStats` forms a commutative monoid under field-wise addition with
//! `CategoryStats::ZERO` as identity. Per-deck records can therefore be
//! computed in any order, on any number of threads, and folded at the end.

use std::iter::Sum;
use std::ops::Add;
use std::thread;

use tracing::debug;

use super::category::{aggregate, CategoryStats, CountMode};
use crate::cards::Deck;

impl CategoryStats {
    /// Field-wise sum of two records. Saturates at `u32::MAX`.
    #[must_use]
    pub fn merge(self, other: CategoryStats) -> CategoryStats {
        CategoryStats {
            number_of_cards: self.number_of_cards.saturating_add(other.number_of_cards),
            number_of_events: self.number_of_events.saturating_add(other.number_of_events),
            number_of_strangers: self
                .number_of_strangers
                .saturating_add(other.number_of_strangers),
            number_of_places: self.number_of_places.saturating_add(other.number_of_places),
            number_of_followers: self
                .number_of_followers
                .saturating_add(other.number_of_followers),
            number_of_items: self.number_of_items.saturating_add(other.number_of_items),
            number_of_enemies: self.number_of_enemies.saturating_add(other.number_of_enemies),
        }
    }
}

impl Add for CategoryStats {
    type Output = CategoryStats;

    fn add(self, other: CategoryStats) -> CategoryStats {
        self.merge(other)
    }
}

impl Sum for CategoryStats {
    fn sum<I: Iterator<Item = CategoryStats>>(iter: I) -> Self {
        reduce(iter)
    }
}

impl<'a> Sum<&'a CategoryStats> for CategoryStats {
    fn sum<I: Iterator<Item = &'a CategoryStats>>(iter: I) -> Self {
        reduce(iter.copied())
    }
}

/// Fold records into one. `reduce([])` is `CategoryStats::ZERO`.
pub fn reduce(records: impl IntoIterator<Item = CategoryStats>) -> CategoryStats {
    records
        .into_iter()
        .fold(CategoryStats::ZERO, CategoryStats::merge)
}

/// Aggregate every deck separately and fold the results.
///
/// Decks are split into at most `workers` chunks, each aggregated on its
/// own scoped thread. With `workers <= 1` (or fewer than two decks) the
/// work runs on the calling thread. The result does not depend on
/// `workers`.
pub fn aggregate_decks(decks: &[Deck], mode: CountMode, workers: usize) -> CategoryStats {
    let per_deck = |chunk: &[Deck]| reduce(chunk.iter().map(|deck| aggregate(&deck.cards, mode)));

    if workers <= 1 || decks.len() < 2 {
        return per_deck(decks);
    }

    let chunk_size = decks.len().div_ceil(workers);
    debug!(
        decks = decks.len(),
        workers,
        chunk_size,
        ?mode,
        "aggregating decks in parallel"
    );

    thread::scope(|scope| {
        let handles: Vec<_> = decks
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || per_deck(chunk)))
            .collect();

        reduce(handles.into_iter().map(|handle| {
            handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
        }))
    })
}
