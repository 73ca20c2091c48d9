//! Event and price types for two-outcome moneyline markets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// A single bookmaker's American moneyline quote on one side of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Canonical bookmaker key (e.g. "fanduel").
    pub book: String,
    /// Outcome label the quote applies to.
    pub outcome: String,
    /// Signed American odds (+N underdog, -N favorite). Never zero in
    /// well-formed data; a zero is rejected at conversion time.
    pub american: i64,
}

impl Price {
    /// Construct a quote.
    pub fn new(book: impl Into<String>, outcome: impl Into<String>, american: i64) -> Self {
        Self {
            book: book.into(),
            outcome: outcome.into(),
            american,
        }
    }
}

/// Immutable snapshot of a two-outcome matchup with per-book quotes.
///
/// Built once per scan by the odds feed; the scanner only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event name, formatted "Away @ Home" by the feed.
    pub id: String,
    /// Sport key the event belongs to (e.g. "basketball_nba").
    pub sport: String,
    /// Ordered pair of outcome labels.
    pub outcomes: [String; 2],
    /// book -> outcome -> American odds.
    quotes: HashMap<String, HashMap<String, i64>>,
}

impl Event {
    /// Create an event with no quotes yet.
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        sport: impl Into<String>,
        outcomes: [S; 2],
    ) -> Self {
        let [a, b] = outcomes;
        Self {
            id: id.into(),
            sport: sport.into(),
            outcomes: [a.into(), b.into()],
            quotes: HashMap::new(),
        }
    }

    /// Record a quote. A bookmaker publishes at most one price per
    /// outcome; duplicates from the source are last-write-wins.
    pub fn set_quote(&mut self, price: Price) {
        self.quotes
            .entry(price.book)
            .or_default()
            .insert(price.outcome, price.american);
    }

    /// Look up a book's quote on an outcome. Absent data is "no quote",
    /// never a default odds value.
    pub fn quote(&self, book: &str, outcome: &str) -> Option<i64> {
        self.quotes.get(book)?.get(outcome).copied()
    }

    /// The complementary outcome label, or `None` if `outcome` is not
    /// one of this event's two sides.
    pub fn opposite(&self, outcome: &str) -> Option<&str> {
        if outcome == self.outcomes[0] {
            Some(&self.outcomes[1])
        } else if outcome == self.outcomes[1] {
            Some(&self.outcomes[0])
        } else {
            None
        }
    }

    /// Check the outcome pair is present and distinct.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.outcomes.iter().any(|o| o.is_empty()) {
            return Err(EventError::MissingOutcome {
                id: self.id.clone(),
            });
        }
        if self.outcomes[0] == self.outcomes[1] {
            return Err(EventError::DuplicateOutcome {
                id: self.id.clone(),
                outcome: self.outcomes[0].clone(),
            });
        }
        Ok(())
    }

    /// Bookmakers with at least one quote on this event.
    pub fn books(&self) -> impl Iterator<Item = &str> {
        self.quotes.keys().map(String::as_str)
    }

    /// Fold another snapshot of the same event into this one,
    /// last-write-wins per (book, outcome).
    pub fn merge(&mut self, other: Event) {
        for (book, sides) in other.quotes {
            for (outcome, american) in sides {
                self.set_quote(Price::new(book.clone(), outcome, american));
            }
        }
    }
}
