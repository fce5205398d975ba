//! Card data model: card and fight types, cards, and decks.
//!
//! ## Key Types
//!
//! - `CardType`: Closed set of printed card types
//! - `FightType`: Combat statistic an enemy is fought with
//! - `Card`: One deck-list entry, possibly standing for several copies
//! - `FightPower`: Parsed enemy power (`Value` or the `"?"` sentinel)
//! - `Deck`: Named, ordered list of cards
//!
//! The data model carries no statistics logic; see `stats` for that.

pub mod deck;
pub mod definition;
pub mod kinds;

pub use deck::Deck;
pub use definition::{Card, FightPower, UNKNOWN_POWER};
pub use kinds::{Bucket, CardType, FightType, ParseKindError, Pool};
