//! Property tests for the aggregation laws.

use proptest::prelude::*;

use talisman_stats::cards::{Card, CardType, FightType};
use talisman_stats::stats::{aggregate, reduce, summarize, CategoryStats, CountMode};

fn card_type() -> impl Strategy<Value = CardType> {
    prop::sample::select(CardType::ALL.to_vec())
}

fn fight_type() -> impl Strategy<Value = FightType> {
    prop::sample::select(FightType::ALL.to_vec())
}

fn any_card() -> impl Strategy<Value = Card> {
    (card_type(), 0u32..20).prop_map(|(t, copies)| Card::new("card", t).with_copies(copies))
}

fn enemy_card() -> impl Strategy<Value = Card> {
    let power = prop_oneof![
        (0u32..15).prop_map(|p| p.to_string()),
        Just("?".to_string()),
    ];
    (fight_type(), power, 0u32..10).prop_map(|(f, p, copies)| {
        Card::new("enemy", CardType::Enemy)
            .with_fight(f, p)
            .with_copies(copies)
    })
}

fn mode() -> impl Strategy<Value = CountMode> {
    prop_oneof![Just(CountMode::Distinct), Just(CountMode::Total)]
}

fn record() -> impl Strategy<Value = CategoryStats> {
    (prop::collection::vec(any_card(), 0..20), mode()).prop_map(|(cards, m)| aggregate(&cards, m))
}

proptest! {
    #[test]
    fn total_equals_bucket_sum(cards in prop::collection::vec(any_card(), 0..40), m in mode()) {
        let stats = aggregate(&cards, m);
        prop_assert!(stats.is_consistent());
        if m == CountMode::Distinct {
            prop_assert_eq!(stats.number_of_cards as usize, cards.len());
        }
    }

    #[test]
    fn reduce_is_associative_and_commutative(a in record(), b in record(), c in record()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!(reduce([a, b, c]), reduce([c, b, a]));
        prop_assert_eq!(a + CategoryStats::ZERO, a);
        prop_assert!(reduce([a, b, c]).is_consistent());
    }

    #[test]
    fn split_then_reduce_matches_whole(
        cards in prop::collection::vec(any_card(), 0..40),
        split in 0usize..40,
        m in mode(),
    ) {
        let split = split.min(cards.len());
        let (left, right) = cards.split_at(split);
        prop_assert_eq!(reduce([aggregate(left, m), aggregate(right, m)]), aggregate(&cards, m));
    }

    #[test]
    fn merged_enemies_count_in_both_pools(cards in prop::collection::vec(enemy_card(), 0..30)) {
        let stats = summarize(&cards).unwrap();
        let copies_of = |f: FightType| -> u32 {
            cards.iter().filter(|c| c.fight_type == Some(f)).map(|c| c.copies).sum()
        };
        let merged = copies_of(FightType::StrengthAndPower);

        prop_assert_eq!(stats.strength.count, copies_of(FightType::Strength) + merged);
        prop_assert_eq!(stats.power.count, copies_of(FightType::Power) + merged);
        prop_assert_eq!(stats.number_of_enemies, cards.iter().map(|c| c.copies).sum::<u32>());
    }

    #[test]
    fn sentinel_never_moves_numerics(
        cards in prop::collection::vec(enemy_card(), 0..20),
        f in fight_type(),
        copies in 1u32..5,
    ) {
        let base = summarize(&cards).unwrap();
        let mut extended = cards.clone();
        extended.push(Card::new("unknown", CardType::Enemy).with_fight(f, "?").with_copies(copies));
        let with_sentinel = summarize(&extended).unwrap();

        for (a, b) in [(base.strength, with_sentinel.strength), (base.power, with_sentinel.power)] {
            prop_assert_eq!(a.min, b.min);
            prop_assert_eq!(a.max, b.max);
            prop_assert_eq!(a.average, b.average);
        }
    }

    #[test]
    fn average_lies_between_min_and_max(cards in prop::collection::vec(enemy_card(), 0..30)) {
        let stats = summarize(&cards).unwrap();
        for pool in [stats.strength, stats.power] {
            if let (Some(min), Some(max), Some(avg)) = (pool.min, pool.max, pool.average) {
                prop_assert!(f64::from(min) <= avg + 1e-9);
                prop_assert!(avg <= f64::from(max) + 1e-9);
            }
        }
    }
}
