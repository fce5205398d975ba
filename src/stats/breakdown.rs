//! Enemy copies per literal fight power.
//!
//! Unlike `combat`, this groups on the raw power string: `"?"` is an
//! ordinary group and nothing is parsed, so it never fails.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, FightPower, FightType};

/// Copies per fight type for one literal power value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerBreakdownEntry {
    #[serde(rename = "fightPower")]
    pub fight_power: String,
    #[serde(rename = "numberOfStrengthEnemies")]
    pub strength: u32,
    #[serde(rename = "numberOfPowerEnemies")]
    pub power: u32,
    #[serde(rename = "numberOfStrengthOrPowerEnemies")]
    pub strength_and_power: u32,
}

impl PowerBreakdownEntry {
    fn new(fight_power: &str) -> Self {
        Self {
            fight_power: fight_power.to_string(),
            ..Self::default()
        }
    }

    /// Copies recorded for one fight type.
    #[must_use]
    pub fn copies(&self, fight_type: FightType) -> u32 {
        match fight_type {
            FightType::Strength => self.strength,
            FightType::Power => self.power,
            FightType::StrengthAndPower => self.strength_and_power,
        }
    }

    fn add(&mut self, fight_type: FightType, copies: u32) {
        let slot = match fight_type {
            FightType::Strength => &mut self.strength,
            FightType::Power => &mut self.power,
            FightType::StrengthAndPower => &mut self.strength_and_power,
        };
        *slot = slot.saturating_add(copies);
    }
}

/// Group enemies by literal fight power and sum copies per fight type.
///
/// One entry per distinct power string. Enemies without a fight type still
/// produce an entry for their power, but add to no column.
///
/// Entries are sorted with numeric literals first (ascending by value, then
/// by literal), followed by every other literal in lexicographic order; the
/// `"?"` group therefore comes last.
pub fn breakdown<'a>(enemy_cards: impl IntoIterator<Item = &'a Card>) -> Vec<PowerBreakdownEntry> {
    let mut groups: FxHashMap<&str, PowerBreakdownEntry> = FxHashMap::default();

    for card in enemy_cards {
        let entry = groups
            .entry(card.fight_power.as_str())
            .or_insert_with(|| PowerBreakdownEntry::new(&card.fight_power));
        if let Some(fight_type) = card.fight_type {
            entry.add(fight_type, card.copies);
        }
    }

    let mut entries: Vec<_> = groups.into_values().collect();
    entries.sort_by(|a, b| sort_key(&a.fight_power).cmp(&sort_key(&b.fight_power)));
    entries
}

fn sort_key(literal: &str) -> (bool, Option<u32>, &str) {
    let numeric = FightPower::parse(literal).and_then(FightPower::value);
    (numeric.is_none(), numeric, literal)
}
