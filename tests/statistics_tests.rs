//! End-to-end aggregation scenarios.
//!
//! These exercise the aggregators the way the statistics endpoints do:
//! per deck, across decks, and over a deck's enemies.

use talisman_stats::cards::{Card, CardType, Deck, FightType};
use talisman_stats::stats::{
    aggregate, aggregate_decks, breakdown, reduce, summarize, CategoryStats, CountMode,
};

fn enemy(name: &str, fight_type: FightType, power: &str, copies: u32) -> Card {
    Card::new(name, CardType::Enemy)
        .with_fight(fight_type, power)
        .with_copies(copies)
}

/// Enemies used by the combat and breakdown scenarios.
fn mixed_enemies(merged_power: &str) -> Vec<Card> {
    vec![
        enemy("enemy-one", FightType::Strength, "2", 3),
        enemy("enemy-two", FightType::Power, "7", 1),
        enemy("enemy-two", FightType::Power, "?", 1),
        enemy("enemy-one", FightType::StrengthAndPower, merged_power, 5),
    ]
}

// =============================================================================
// Category Aggregation
// =============================================================================

#[test]
fn test_single_entry_with_copies() {
    let cards = vec![Card::new("Shadow", CardType::Enemy).with_copies(3)];

    assert_eq!(aggregate(&cards, CountMode::Distinct).number_of_enemies, 1);
    assert_eq!(aggregate(&cards, CountMode::Total).number_of_enemies, 3);
}

#[test]
fn test_total_equals_bucket_sum() {
    let deck = Deck::new("base").with_cards([
        Card::new("Storm", CardType::Event).with_copies(2),
        Card::new("Eclipse", CardType::MoonEvent).with_copies(1),
        Card::new("Sword", CardType::Item).with_copies(4),
        Card::new("Wolf", CardType::Enemy).with_copies(3),
    ]);

    for mode in [CountMode::Distinct, CountMode::Total] {
        let stats = aggregate(&deck.cards, mode);
        assert!(stats.is_consistent(), "{mode:?}: {stats:?}");
    }
    assert_eq!(aggregate(&deck.cards, CountMode::Total).number_of_cards, 10);
}

// =============================================================================
// Cross-Deck Reduction
// =============================================================================

fn two_decks() -> Vec<Deck> {
    vec![
        Deck::new("deck-one").with_cards([
            Card::new("Wolf", CardType::Enemy).with_copies(2),
            Card::new("Bear", CardType::Enemy).with_copies(1),
            Card::new("Inn", CardType::Place),
        ]),
        Deck::new("deck-two").with_cards([
            Card::new("Troll", CardType::Enemy).with_copies(3),
            Card::new("Inn", CardType::Place),
        ]),
    ]
}

#[test]
fn test_cross_deck_total() {
    let decks = two_decks();
    let per_deck: Vec<_> = decks
        .iter()
        .map(|d| aggregate(&d.cards, CountMode::Total))
        .collect();

    let total = reduce(per_deck);
    assert_eq!(total.number_of_enemies, 6);
    assert_eq!(total.number_of_places, 2);
    assert_eq!(total.number_of_cards, 8);
}

#[test]
fn test_cross_deck_distinct() {
    let decks = two_decks();
    let per_deck: Vec<_> = decks
        .iter()
        .map(|d| aggregate(&d.cards, CountMode::Distinct))
        .collect();

    let total = reduce(per_deck);
    assert_eq!(total.number_of_enemies, 3);
    assert_eq!(total.number_of_cards, 5);
}

#[test]
fn test_concatenation_matches_reduction() {
    let decks = two_decks();
    let all_cards: Vec<&Card> = decks.iter().flat_map(|d| d.cards.iter()).collect();

    for mode in [CountMode::Distinct, CountMode::Total] {
        let concatenated = aggregate(all_cards.iter().copied(), mode);
        let reduced = reduce(decks.iter().map(|d| aggregate(&d.cards, mode)));
        assert_eq!(concatenated, reduced);
        assert_eq!(aggregate_decks(&decks, mode, 2), reduced);
    }
}

#[test]
fn test_reduce_nothing() {
    assert_eq!(reduce(std::iter::empty()), CategoryStats::ZERO);
}

// =============================================================================
// Combat Statistics
// =============================================================================

#[test]
fn test_combat_summary() {
    let stats = summarize(&mixed_enemies("5")).unwrap();

    assert_eq!(stats.number_of_enemies, 10);

    assert_eq!(stats.strength.count, 8);
    assert_eq!(stats.strength.min, Some(2));
    assert_eq!(stats.strength.max, Some(5));
    assert_eq!(stats.strength.average, Some(3.875));

    assert_eq!(stats.power.count, 7);
    assert_eq!(stats.power.min, Some(5));
    assert_eq!(stats.power.max, Some(7));
    let average = stats.power.average.unwrap();
    assert!((average - 32.0 / 6.0).abs() < 1e-9, "power average {average}");
}

#[test]
fn test_merged_enemy_counts_in_both_pools() {
    let with_merged = summarize(&mixed_enemies("5")).unwrap();
    let without: Vec<_> = mixed_enemies("5").into_iter().take(3).collect();
    let without = summarize(&without).unwrap();

    assert_eq!(with_merged.strength.count - without.strength.count, 5);
    assert_eq!(with_merged.power.count - without.power.count, 5);
}

#[test]
fn test_sentinel_excluded_from_numerics() {
    let known = vec![enemy("Spirit", FightType::Power, "7", 1)];
    let mut with_unknown = known.clone();
    with_unknown.push(enemy("Shapeshifter", FightType::Power, "?", 4));

    let a = summarize(&known).unwrap();
    let b = summarize(&with_unknown).unwrap();

    assert_eq!(b.power.count, a.power.count + 4);
    assert_eq!(b.power.min, a.power.min);
    assert_eq!(b.power.max, a.power.max);
    assert_eq!(b.power.average, a.power.average);
}

// =============================================================================
// Power Breakdown
// =============================================================================

#[test]
fn test_power_breakdown_merges_literals() {
    let entries = breakdown(&mixed_enemies("2"));
    let powers: Vec<_> = entries.iter().map(|e| e.fight_power.as_str()).collect();
    assert_eq!(powers, vec!["2", "7", "?"]);

    assert_eq!(entries[0].strength, 3);
    assert_eq!(entries[0].power, 0);
    assert_eq!(entries[0].strength_and_power, 5);

    assert_eq!(entries[1].power, 1);
    assert_eq!(entries[2].power, 1);
    assert_eq!(entries[2].strength, 0);
}
