//! # talisman-stats
//!
//! Deck catalog and descriptive statistics for Talisman cards.
//!
//! ## Design Principles
//!
//! 1. **Closed Vocabularies**: Card types and fight types are enums with
//!    explicit mapping tables (`CardType::bucket`, `FightType::pools`).
//!    Adding a variant is a compile error until every table handles it.
//!
//! 2. **Pure Aggregators**: Statistics are computed by free functions over
//!    borrowed cards. They do no I/O and return fresh values.
//!
//! 3. **Explicit "No Data"**: A combat pool with no known power reports
//!    `None` for min/max/average instead of failing the request.
//!
//! ## Architecture
//!
//! - **Monoid Reduction**: `CategoryStats` adds field-wise with a zero
//!   identity, so per-deck records are computed on worker threads and
//!   folded in any order.
//!
//! - **Store Seam**: Services only see the `DeckStore` trait. Lookups that
//!   match nothing are `StoreError`s carrying the key, mapped to a
//!   `{ status, message }` response by `ApiError`.
//!
//! ## Modules
//!
//! - `cards`: Card/fight types, cards, decks
//! - `stats`: Category, reducer, combat and power-breakdown aggregators
//! - `store`: `DeckStore` trait and the JSON-backed in-memory catalog
//! - `service`: Deck and statistics query facades
//! - `config`: YAML application configuration
//! - `logging`: Tracing subscriber setup

pub mod cards;
pub mod config;
pub mod logging;
pub mod service;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use crate::cards::{Bucket, Card, CardType, Deck, FightPower, FightType, Pool};

pub use crate::stats::{
    aggregate, aggregate_decks, breakdown, reduce, summarize, CategoryStats, CombatStats,
    CountMode, PoolStats, PowerBreakdownEntry, StatsError,
};

pub use crate::store::{DeckStore, InMemoryDeckStore, StoreError};

pub use crate::service::{ApiError, DeckService, ErrorResponse, StatisticsService};

pub use crate::config::{AppConfig, ConfigError};
