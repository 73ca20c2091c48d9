//! Static bookmaker and sport lookup tables.
//!
//! The odds source partitions US bookmakers across two regions ("us" and
//! "us2") and keys them by canonical names that differ from the names
//! bettors use (Caesars is `williamhill_us`). These tables drive which
//! regions the feed must query for a given set of books.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use strum::{Display, EnumString};

use crate::error::FeedError;

/// Odds source region a bookmaker is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    /// Primary US region.
    Us,
    /// Secondary US region.
    Us2,
}

/// User-facing bookmaker name -> canonical API key.
pub static BOOK_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // us
        ("fanduel", "fanduel"),
        ("draftkings", "draftkings"),
        ("caesars", "williamhill_us"),
        ("betrivers", "betrivers"),
        ("fanatics", "fanatics"),
        ("betmgm", "betmgm"),
        // us2
        ("ballybet", "ballybet"),
        ("espnbet", "espnbet"),
        ("betparx", "betparx"),
        ("fliff", "fliff"),
        ("hardrockbet", "hardrockbet"),
    ])
});

/// Canonical keys served from the "us" region.
pub static US_BOOKS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "fanduel",
        "draftkings",
        "williamhill_us",
        "betrivers",
        "fanatics",
        "betmgm",
    ])
});

/// Canonical keys served from the "us2" region.
pub static US2_BOOKS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["ballybet", "espnbet", "betparx", "fliff", "hardrockbet"])
});

/// User-facing sport name -> odds source sport key.
pub static SPORT_KEYS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("nba", "basketball_nba"),
        ("ncaab", "basketball_ncaab"),
        ("ncaaf", "americanfootball_ncaaf"),
        ("eurobasketball", "basketball_euroleague"),
        ("nfl", "americanfootball_nfl"),
        ("mlb", "baseball_mlb"),
        ("nhl", "icehockey_nhl"),
    ])
});

/// Resolve a user-facing bookmaker name to its canonical API key.
pub fn resolve_book(name: &str) -> Result<&'static str, FeedError> {
    let trimmed = name.trim().to_lowercase();
    BOOK_ALIASES
        .get(trimmed.as_str())
        .copied()
        .ok_or_else(|| FeedError::UnknownBook(name.to_string()))
}

/// Resolve a user-facing sport name to its API sport key.
pub fn sport_key(name: &str) -> Result<&'static str, FeedError> {
    let trimmed = name.trim().to_lowercase();
    SPORT_KEYS
        .get(trimmed.as_str())
        .copied()
        .ok_or_else(|| FeedError::UnknownSport(name.to_string()))
}

/// Regions spanning the given canonical book keys.
///
/// Falls back to `us` when no book matches either set, so a fetch is
/// always possible.
pub fn regions_needed<'a>(books: impl IntoIterator<Item = &'a str>) -> Vec<Region> {
    let mut us = false;
    let mut us2 = false;
    for book in books {
        us |= US_BOOKS.contains(book);
        us2 |= US2_BOOKS.contains(book);
    }

    let mut regions = Vec::new();
    if us {
        regions.push(Region::Us);
    }
    if us2 {
        regions.push(Region::Us2);
    }
    if regions.is_empty() {
        regions.push(Region::Us);
    }
    regions
}
