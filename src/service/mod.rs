//! Query facades over a `DeckStore`.
//!
//! - `DeckService`: deck and card lookups
//! - `StatisticsService`: category, combat and power statistics
//!
//! Both return `ApiError` on failure. `ApiError::to_response` turns it into
//! the `{ status, message }` body callers hand back to clients.

pub mod decks;
pub mod statistics;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::StatsError;
use crate::store::StoreError;

pub use decks::DeckService;
pub use statistics::StatisticsService;

/// Failure of a service query.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl ApiError {
    /// HTTP-style status code for this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Store(StoreError::DuplicateDeck { .. }) => 409,
            ApiError::Store(err) if err.is_not_found() => 404,
            ApiError::Store(_) => 500,
            ApiError::Stats(StatsError::MalformedPower { .. }) => 422,
        }
    }

    /// Structured response body.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status(),
            message: self.to_string(),
        }
    }
}

/// Error body returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}
