//! Card counts per bucket.
//!
//! Card types are folded into six buckets (see `CardType::bucket`). Each
//! bucket either counts deck-list entries or sums their copies, depending
//! on the `CountMode`.

use serde::{Deserialize, Serialize};

use crate::cards::{Bucket, Card};

/// How cards are counted into buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountMode {
    /// One per deck-list entry, ignoring copies.
    Distinct,
    /// Sum of copies.
    Total,
}

impl CountMode {
    /// How much a single card adds to its bucket.
    #[must_use]
    pub fn weight(self, card: &Card) -> u32 {
        match self {
            CountMode::Distinct => 1,
            CountMode::Total => card.copies,
        }
    }
}

/// Card counts per bucket plus their total.
///
/// `number_of_cards` is always derived from the buckets, never from the
/// length of the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub number_of_cards: u32,
    pub number_of_events: u32,
    pub number_of_strangers: u32,
    pub number_of_places: u32,
    pub number_of_followers: u32,
    pub number_of_items: u32,
    pub number_of_enemies: u32,
}

impl CategoryStats {
    /// The all-zero record.
    pub const ZERO: CategoryStats = CategoryStats {
        number_of_cards: 0,
        number_of_events: 0,
        number_of_strangers: 0,
        number_of_places: 0,
        number_of_followers: 0,
        number_of_items: 0,
        number_of_enemies: 0,
    };

    /// Build a record from bucket counts; the total is their sum.
    #[must_use]
    pub fn from_buckets(
        events: u32,
        strangers: u32,
        places: u32,
        followers: u32,
        items: u32,
        enemies: u32,
    ) -> Self {
        let total = [strangers, places, followers, items, enemies]
            .into_iter()
            .fold(events, u32::saturating_add);

        Self {
            number_of_cards: total,
            number_of_events: events,
            number_of_strangers: strangers,
            number_of_places: places,
            number_of_followers: followers,
            number_of_items: items,
            number_of_enemies: enemies,
        }
    }

    /// Count in one bucket.
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::Events => self.number_of_events,
            Bucket::Strangers => self.number_of_strangers,
            Bucket::Places => self.number_of_places,
            Bucket::Followers => self.number_of_followers,
            Bucket::Items => self.number_of_items,
            Bucket::Enemies => self.number_of_enemies,
        }
    }

    /// Return a copy with `amount` added to one bucket and to the total.
    #[must_use]
    pub fn counted(self, bucket: Bucket, amount: u32) -> Self {
        let mut next = self;
        let slot = match bucket {
            Bucket::Events => &mut next.number_of_events,
            Bucket::Strangers => &mut next.number_of_strangers,
            Bucket::Places => &mut next.number_of_places,
            Bucket::Followers => &mut next.number_of_followers,
            Bucket::Items => &mut next.number_of_items,
            Bucket::Enemies => &mut next.number_of_enemies,
        };
        *slot = slot.saturating_add(amount);
        next.number_of_cards = next.bucket_sum();
        next
    }

    /// Sum of the six buckets.
    #[must_use]
    pub fn bucket_sum(&self) -> u32 {
        [
            self.number_of_strangers,
            self.number_of_places,
            self.number_of_followers,
            self.number_of_items,
            self.number_of_enemies,
        ]
        .into_iter()
        .fold(self.number_of_events, u32::saturating_add)
    }

    /// Check that the total equals the sum of the buckets.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.number_of_cards == self.bucket_sum()
    }
}

/// Count cards into buckets.
///
/// An empty input yields `CategoryStats::ZERO`. Cards whose type has no
/// bucket are skipped.
pub fn aggregate<'a>(cards: impl IntoIterator<Item = &'a Card>, mode: CountMode) -> CategoryStats {
    cards
        .into_iter()
        .fold(CategoryStats::ZERO, |stats, card| match card.card_type.bucket() {
            Some(bucket) => stats.counted(bucket, mode.weight(card)),
            None => stats,
        })
}
