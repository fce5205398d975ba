//! Statistics aggregation over card collections.
//!
//! All aggregators are pure functions over borrowed cards. They never
//! filter by deck and never see a "not found" condition: the caller hands
//! them a (possibly empty) collection and gets a freshly built value back.
//!
//! ## Aggregators
//!
//! - `category::aggregate`: card counts per bucket, by entry or by copy
//! - `reducer::reduce`: folds per-deck category records into one
//! - `combat::summarize`: count/min/max/average per combat pool
//! - `breakdown::breakdown`: copies per fight type for each literal power

pub mod breakdown;
pub mod category;
pub mod combat;
pub mod reducer;

use thiserror::Error;

pub use breakdown::{breakdown, PowerBreakdownEntry};
pub use category::{aggregate, CategoryStats, CountMode};
pub use combat::{summarize, CombatStats, PoolStats};
pub use reducer::{aggregate_decks, reduce};

/// Failure of a single aggregation call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Fight power that is neither `"?"` nor a non-negative integer.
    #[error("card '{card}' has malformed fight power '{value}'")]
    MalformedPower { card: String, value: String },
}
