//! Catalog loading and lookup tests against the bundled sample catalog.

use std::io::Write;
use std::path::PathBuf;

use talisman_stats::cards::{CardType, FightType};
use talisman_stats::store::{DeckStore, InMemoryDeckStore, StoreError};

fn sample_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/decks.json")
}

#[test]
fn test_load_sample_catalog() {
    let store = InMemoryDeckStore::from_path(sample_catalog()).expect("sample catalog loads");

    assert_eq!(store.len(), 2);
    let names: Vec<_> = store.list_decks().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Base", "Dungeon"]);
}

#[test]
fn test_polish_labels_are_read() {
    let store = InMemoryDeckStore::from_path(sample_catalog()).unwrap();

    let troll = store.card_in_deck("Dungeon", "Troll").unwrap();
    assert_eq!(troll.card_type, CardType::Enemy);
    assert_eq!(troll.fight_type, Some(FightType::Strength));

    let lantern = store.card_in_deck("Dungeon", "Lantern").unwrap();
    assert_eq!(lantern.card_type, CardType::MagicItem);
}

#[test]
fn test_filters() {
    let store = InMemoryDeckStore::from_path(sample_catalog()).unwrap();

    assert_eq!(store.cards_of_type("Base", CardType::Enemy).unwrap().len(), 4);
    assert_eq!(
        store
            .enemies_by_fight_type("Base", FightType::Power)
            .unwrap()
            .len(),
        2
    );
    assert!(matches!(
        store.cards_of_type("Dungeon", CardType::Follower),
        Err(StoreError::CardsOfTypeNotFound { .. })
    ));
}

#[test]
fn test_missing_file() {
    let err = InMemoryDeckStore::from_path("no/such/catalog.json").unwrap_err();

    assert!(matches!(err, StoreError::Read { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn test_duplicate_names_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name_of_deck": "Base", "cards": []}}, {{"name_of_deck": "Base", "cards": []}}]"#
    )
    .unwrap();

    let err = InMemoryDeckStore::from_path(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Deck: Base already exists!");
}

#[test]
fn test_malformed_json() {
    let err = InMemoryDeckStore::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
}

#[test]
fn test_stored_constant_names_are_read() {
    let json = r#"[{
        "name_of_deck": "Exported",
        "cards": [
            {"name": "Bandit", "type": "WRÓG", "fight_statistic": "SIŁA", "fight_power": "4"},
            {"name": "Ghost", "type": "WRÓG", "fight_statistic": "SIŁA_MOC", "fight_power": "?"},
            {"name": "Amulet", "type": "MAGICZNY_PRZEDMIOT"},
            {"name": "Blizzard", "type": "KSIĘŻYCOWE_ZDARZENIE", "number_of_copies": 2}
        ]
    }]"#;
    let store = InMemoryDeckStore::from_json_str(json).expect("constant names load");

    assert_eq!(store.cards_of_type("Exported", CardType::Enemy).unwrap().len(), 2);
    assert_eq!(
        store.card_in_deck("Exported", "Amulet").unwrap().card_type,
        CardType::MagicItem
    );
    assert_eq!(
        store.card_in_deck("Exported", "Ghost").unwrap().fight_type,
        Some(FightType::StrengthAndPower)
    );
    assert_eq!(
        store.card_in_deck("Exported", "Blizzard").unwrap().card_type,
        CardType::MoonEvent
    );
}
