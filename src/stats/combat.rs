//! Combat statistics for enemy cards.
//!
//! Enemies feed one or both combat pools depending on their fight type
//! (see `FightType::pools`). For each pool we report how many copies
//! belong to it and, over the members with a known power, the minimum,
//! maximum and copy-weighted average.
//!
//! ## Sentinel Handling
//!
//! An enemy with power `"?"` counts toward `number_of_enemies` and toward
//! its pools' `count`, but never toward `min`, `max` or `average`. A pool without any
//! known power reports `None` for all three.
//!
//! ## Wire Shape
//!
//! `CombatStats` serializes flat, one field per pool statistic
//! (`numberOfEnemiesWithStrength`, `averageEnemyStrength`, `minEnemyPower`, ...),
//! the same record shape the category and breakdown outputs use.

use serde::{Deserialize, Serialize};

use super::StatsError;
use crate::cards::{Card, FightPower, Pool};

/// Summary of one combat pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Copies of every member, sentinel-valued ones included.
    pub count: u32,
    /// Smallest known power, `None` when no member has one.
    pub min: Option<u32>,
    /// Largest known power, `None` when no member has one.
    pub max: Option<u32>,
    /// Copy-weighted mean of known powers, `None` when the weight is zero.
    pub average: Option<f64>,
}

impl PoolStats {
    /// Check if any member had a known power.
    #[must_use]
    pub fn has_numeric_data(&self) -> bool {
        self.min.is_some()
    }
}

/// Combat summary of a set of enemies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "CombatRecord", from = "CombatRecord")]
pub struct CombatStats {
    /// Copies of every input card.
    pub number_of_enemies: u32,
    pub strength: PoolStats,
    pub power: PoolStats,
}

impl CombatStats {
    /// Statistics for one pool.
    #[must_use]
    pub fn pool(&self, pool: Pool) -> &PoolStats {
        match pool {
            Pool::Strength => &self.strength,
            Pool::Power => &self.power,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CombatRecord {
    number_of_enemies: u32,
    number_of_enemies_with_strength: u32,
    average_enemy_strength: Option<f64>,
    min_enemy_strength: Option<u32>,
    max_enemy_strength: Option<u32>,
    number_of_enemies_with_power: u32,
    average_enemy_power: Option<f64>,
    min_enemy_power: Option<u32>,
    max_enemy_power: Option<u32>,
}

impl From<CombatStats> for CombatRecord {
    fn from(stats: CombatStats) -> Self {
        let CombatStats {
            number_of_enemies,
            strength,
            power,
        } = stats;
        CombatRecord {
            number_of_enemies,
            number_of_enemies_with_strength: strength.count,
            average_enemy_strength: strength.average,
            min_enemy_strength: strength.min,
            max_enemy_strength: strength.max,
            number_of_enemies_with_power: power.count,
            average_enemy_power: power.average,
            min_enemy_power: power.min,
            max_enemy_power: power.max,
        }
    }
}

impl From<CombatRecord> for CombatStats {
    fn from(record: CombatRecord) -> Self {
        CombatStats {
            number_of_enemies: record.number_of_enemies,
            strength: PoolStats {
                count: record.number_of_enemies_with_strength,
                min: record.min_enemy_strength,
                max: record.max_enemy_strength,
                average: record.average_enemy_strength,
            },
            power: PoolStats {
                count: record.number_of_enemies_with_power,
                min: record.min_enemy_power,
                max: record.max_enemy_power,
                average: record.average_enemy_power,
            },
        }
    }
}

#[derive(Default)]
struct PoolAccumulator {
    count: u32,
    min: Option<u32>,
    max: Option<u32>,
    weight: u64,
    weighted_total: u64,
}

impl PoolAccumulator {
    fn add(&mut self, copies: u32, power: FightPower) {
        self.count = self.count.saturating_add(copies);

        let Some(value) = power.value() else {
            return;
        };
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        self.weight = self.weight.saturating_add(u64::from(copies));
        self.weighted_total = self
            .weighted_total
            .saturating_add(u64::from(copies) * u64::from(value));
    }

    fn finish(self) -> PoolStats {
        let average = (self.weight > 0).then(|| self.weighted_total as f64 / self.weight as f64);
        PoolStats {
            count: self.count,
            min: self.min,
            max: self.max,
            average,
        }
    }
}

/// Summarize enemies per combat pool.
///
/// The input is taken as-is: it is not re-filtered by card type. Enemies
/// without a fight type only count toward `number_of_enemies`.
///
/// Fails with `StatsError::MalformedPower` if a pool member's power is
/// neither `"?"` nor a non-negative integer.
pub fn summarize<'a>(
    enemy_cards: impl IntoIterator<Item = &'a Card>,
) -> Result<CombatStats, StatsError> {
    let mut enemies = 0u32;
    let mut strength = PoolAccumulator::default();
    let mut power = PoolAccumulator::default();

    for card in enemy_cards {
        enemies = enemies.saturating_add(card.copies);

        let Some(fight_type) = card.fight_type else {
            continue;
        };
        let parsed = card.power()?;

        for pool in fight_type.pools() {
            match pool {
                Pool::Strength => strength.add(card.copies, parsed),
                Pool::Power => power.add(card.copies, parsed),
            }
        }
    }

    Ok(CombatStats {
        number_of_enemies: enemies,
        strength: strength.finish(),
        power: power.finish(),
    })
}
