//! Card definitions - one entry of a deck list.
//!
//! A `Card` is a single line of a deck list. The same printed card can stand
//! for several physical copies (`copies`), and names are not unique within
//! a deck.
//!
//! Enemy cards additionally carry a fight type and a fight power. The power
//! is kept as the catalog's raw string; `Card::power` parses it on demand.

use serde::{Deserialize, Serialize};

use super::kinds::{CardType, FightType};
use crate::stats::StatsError;

/// Literal fight power marking an enemy whose power is unknown or variable.
pub const UNKNOWN_POWER: &str = "?";

/// Parsed fight power of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FightPower {
    /// Known, non-negative power.
    Value(u32),
    /// The `"?"` sentinel.
    Unknown,
}

impl FightPower {
    /// Parse a raw fight power string.
    ///
    /// Returns `None` for anything that is neither `"?"` nor a plain
    /// run of decimal digits fitting in a `u32`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == UNKNOWN_POWER {
            return Some(FightPower::Unknown);
        }
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(FightPower::Value)
    }

    /// The numeric value, if known.
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            FightPower::Value(v) => Some(v),
            FightPower::Unknown => None,
        }
    }
}

/// One entry of a deck list.
///
/// ## Example
///
/// ```
/// use talisman_stats::cards::{Card, CardType, FightPower, FightType};
///
/// let dragon = Card::new("Dragon", CardType::Enemy)
///     .with_fight(FightType::Strength, "7")
///     .with_copies(2);
///
/// assert_eq!(dragon.power().unwrap(), FightPower::Value(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card name. Not unique within a deck.
    pub name: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    #[serde(default)]
    pub subtype: String,

    /// Fight type; only meaningful for enemies.
    #[serde(rename = "fight_statistic", default)]
    pub fight_type: Option<FightType>,

    /// Raw fight power: decimal digits or `"?"`. Only meaningful for enemies.
    #[serde(default)]
    pub fight_power: String,

    /// Encounter number printed on the card. Informational only.
    #[serde(default)]
    pub meeting_number: u32,

    /// Physical copies this entry stands for.
    #[serde(rename = "number_of_copies", default)]
    pub copies: u32,

    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Create a card with a single copy and no fight data.
    #[must_use]
    pub fn new(name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            name: name.into(),
            card_type,
            subtype: String::new(),
            fight_type: None,
            fight_power: String::new(),
            meeting_number: 0,
            copies: 1,
            description: String::new(),
        }
    }

    /// Set the number of copies (builder pattern).
    #[must_use]
    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    /// Set fight type and raw fight power (builder pattern).
    #[must_use]
    pub fn with_fight(mut self, fight_type: FightType, power: impl Into<String>) -> Self {
        self.fight_type = Some(fight_type);
        self.fight_power = power.into();
        self
    }

    /// Set the raw fight power without a fight type.
    #[must_use]
    pub fn with_power(mut self, power: impl Into<String>) -> Self {
        self.fight_power = power.into();
        self
    }

    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = subtype.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if this card is an enemy.
    #[must_use]
    pub fn is_enemy(&self) -> bool {
        self.card_type == CardType::Enemy
    }

    /// Parse the fight power.
    ///
    /// Fails with `StatsError::MalformedPower` naming this card when the
    /// raw value is neither `"?"` nor a non-negative integer.
    pub fn power(&self) -> Result<FightPower, StatsError> {
        FightPower::parse(&self.fight_power).ok_or_else(|| StatsError::MalformedPower {
            card: self.name.clone(),
            value: self.fight_power.clone(),
        })
    }
}
