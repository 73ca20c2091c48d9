//! Unified error types for the hedge finder.

use rust_decimal::Decimal;
use thiserror::Error;

/// Unified error type for the hedge finder.
#[derive(Error, Debug)]
pub enum HedgeError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Odds-feed error.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// Odds conversion or hedge arithmetic error.
    #[error("odds error: {0}")]
    Odds(#[from] OddsError),

    /// Malformed event error.
    #[error("event error: {0}")]
    Event(#[from] EventError),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Odds conversion and hedge calculation errors.
///
/// These are per-pair errors: the scanner converts them into skip
/// records rather than aborting a scan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OddsError {
    /// American odds of zero have no decimal equivalent.
    #[error("american odds must be non-zero")]
    ZeroAmerican,

    /// Decimal odds at or below 1.0 cannot price a hedge.
    #[error("decimal odds {odds} must exceed 1.0")]
    SubUnityDecimal {
        /// The offending decimal odds value.
        odds: Decimal,
    },

    /// Stake must be positive to derive a hedge.
    #[error("bonus stake {stake} must be positive")]
    NonPositiveStake {
        /// The offending stake.
        stake: Decimal,
    },
}

/// Event snapshots that cannot be scanned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    /// An outcome label is empty.
    #[error("event {id} is missing an outcome label")]
    MissingOutcome {
        /// The offending event id.
        id: String,
    },

    /// Both outcome labels are the same.
    #[error("event {id} lists `{outcome}` on both sides")]
    DuplicateOutcome {
        /// The offending event id.
        id: String,
        /// The repeated label.
        outcome: String,
    },
}

/// Odds retrieval and normalization errors.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Sport name not in the supported table.
    #[error("unknown sport `{0}`")]
    UnknownSport(String),

    /// Bookmaker name not in the alias table.
    #[error("unknown bookmaker `{0}`")]
    UnknownBook(String),

    /// No API key configured for fetching.
    #[error("ODDS_API_KEY is not configured")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be normalized.
    #[error("failed to parse odds response: {0}")]
    Parse(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, HedgeError>;
