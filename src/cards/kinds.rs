//! Closed card vocabularies: card types, fight types, and what they map to.
//!
//! The catalog stores these as strings. Here they are enums with explicit
//! mapping tables, so adding a variant forces every mapping to be revisited.
//!
//! ## Mapping Tables
//!
//! - `CardType::bucket`: card type -> statistics bucket
//! - `FightType::pools`: fight type -> combat pools it contributes to
//! - `CardType::labels`, `FightType::labels`: accepted spellings, English
//!   and Polish, as printed on the card and as stored constant names

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

/// Card type as printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    #[serde(alias = "ZDARZENIE", alias = "Zdarzenie")]
    Event,
    #[serde(alias = "KSIĘŻYCOWE_ZDARZENIE", alias = "Księżycowe zdarzenie")]
    MoonEvent,
    #[serde(alias = "NIEZNAJOMY", alias = "Nieznajomy")]
    Stranger,
    #[serde(alias = "MIEJSCE", alias = "Miejsce")]
    Place,
    #[serde(alias = "PRZYJACIEL", alias = "Przyjaciel")]
    Follower,
    #[serde(alias = "PRZEDMIOT", alias = "Przedmiot")]
    Item,
    #[serde(alias = "MAGICZNY_PRZEDMIOT", alias = "Magiczny przedmiot")]
    MagicItem,
    #[serde(alias = "WRÓG", alias = "Wróg")]
    Enemy,
}

impl CardType {
    /// Every card type, in declaration order.
    pub const ALL: [CardType; 8] = [
        CardType::Event,
        CardType::MoonEvent,
        CardType::Stranger,
        CardType::Place,
        CardType::Follower,
        CardType::Item,
        CardType::MagicItem,
        CardType::Enemy,
    ];

    /// Statistics bucket this card type is counted under.
    ///
    /// Returns `None` for a type that belongs to no bucket; such cards are
    /// left out of every bucket and therefore out of the total as well.
    /// Every current type has a bucket.
    #[must_use]
    pub const fn bucket(self) -> Option<Bucket> {
        match self {
            CardType::Event | CardType::MoonEvent => Some(Bucket::Events),
            CardType::Stranger => Some(Bucket::Strangers),
            CardType::Place => Some(Bucket::Places),
            CardType::Follower => Some(Bucket::Followers),
            CardType::Item | CardType::MagicItem => Some(Bucket::Items),
            CardType::Enemy => Some(Bucket::Enemies),
        }
    }

    /// Canonical upper-case label (same as the serialized form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Event => "EVENT",
            CardType::MoonEvent => "MOON_EVENT",
            CardType::Stranger => "STRANGER",
            CardType::Place => "PLACE",
            CardType::Follower => "FOLLOWER",
            CardType::Item => "ITEM",
            CardType::MagicItem => "MAGIC_ITEM",
            CardType::Enemy => "ENEMY",
        }
    }

    /// Every spelling accepted for this type, canonical label first.
    ///
    /// Matches the serde aliases one for one.
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            CardType::Event => &["EVENT", "ZDARZENIE", "Zdarzenie"],
            CardType::MoonEvent => &[
                "MOON_EVENT",
                "KSIĘŻYCOWE_ZDARZENIE",
                "Księżycowe zdarzenie",
            ],
            CardType::Stranger => &["STRANGER", "NIEZNAJOMY", "Nieznajomy"],
            CardType::Place => &["PLACE", "MIEJSCE", "Miejsce"],
            CardType::Follower => &["FOLLOWER", "PRZYJACIEL", "Przyjaciel"],
            CardType::Item => &["ITEM", "PRZEDMIOT", "Przedmiot"],
            CardType::MagicItem => &[
                "MAGIC_ITEM",
                "MAGICZNY_PRZEDMIOT",
                "Magiczny przedmiot",
            ],
            CardType::Enemy => &["ENEMY", "WRÓG", "Wróg"],
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        CardType::ALL
            .into_iter()
            .find(|t| matches_label(t.labels(), &normalized))
            .ok_or_else(|| ParseKindError::CardType(s.to_string()))
    }
}

/// Semantic group a card type is counted under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Events,
    Strangers,
    Places,
    Followers,
    Items,
    Enemies,
}

/// Combat statistic an enemy is fought with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FightType {
    #[serde(alias = "SIŁA", alias = "Siła")]
    Strength,
    #[serde(alias = "MOC", alias = "Moc")]
    Power,
    /// Belongs to both the strength and the power pool.
    #[serde(alias = "SIŁA_MOC", alias = "Siła/Moc")]
    StrengthAndPower,
}

impl FightType {
    /// Every fight type, in declaration order.
    pub const ALL: [FightType; 3] = [
        FightType::Strength,
        FightType::Power,
        FightType::StrengthAndPower,
    ];

    /// Pools an enemy with this fight type contributes to.
    ///
    /// `StrengthAndPower` contributes fully to both pools.
    #[must_use]
    pub fn pools(self) -> SmallVec<[Pool; 2]> {
        match self {
            FightType::Strength => smallvec![Pool::Strength],
            FightType::Power => smallvec![Pool::Power],
            FightType::StrengthAndPower => smallvec![Pool::Strength, Pool::Power],
        }
    }

    /// Check if this fight type feeds the given pool.
    #[must_use]
    pub fn feeds(self, pool: Pool) -> bool {
        self.pools().contains(&pool)
    }

    /// Canonical upper-case label (same as the serialized form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FightType::Strength => "STRENGTH",
            FightType::Power => "POWER",
            FightType::StrengthAndPower => "STRENGTH_AND_POWER",
        }
    }

    /// Every spelling accepted for this fight type, canonical label first.
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            FightType::Strength => &["STRENGTH", "SIŁA", "Siła"],
            FightType::Power => &["POWER", "MOC", "Moc"],
            FightType::StrengthAndPower => &["STRENGTH_AND_POWER", "SIŁA_MOC", "Siła/Moc"],
        }
    }
}

impl std::fmt::Display for FightType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FightType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        FightType::ALL
            .into_iter()
            .find(|t| matches_label(t.labels(), &normalized))
            .ok_or_else(|| ParseKindError::FightType(s.to_string()))
    }
}

/// One of the two combat tracks enemies are measured on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pool {
    Strength,
    Power,
}

/// Failure to parse a card or fight type label.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseKindError {
    #[error("unknown card type '{0}'")]
    CardType(String),
    #[error("unknown fight type '{0}'")]
    FightType(String),
}

// "moon-event", "Moon Event" and "MOON_EVENT" all name the same variant,
// as do "Siła/Moc" and "SIŁA_MOC".
fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(|c| match c {
            '-' | ' ' | '/' => '_'.to_uppercase(),
            c => c.to_uppercase(),
        })
        .collect()
}

fn matches_label(labels: &[&str], normalized: &str) -> bool {
    labels.iter().any(|label| normalize_label(label) == normalized)
}
