//! Mock odds feed for unit testing.
//!
//! Builds in-memory event snapshots without network access.

use crate::market::{Event, Price};

/// Builder for a mock event with chained quotes.
#[derive(Debug, Clone)]
pub struct MockEventBuilder {
    event: Event,
}

impl MockEventBuilder {
    /// Start an event named "{away} @ {home}", matching the feed's
    /// naming convention.
    pub fn matchup(away: &str, home: &str, sport: &str) -> Self {
        Self {
            event: Event::new(format!("{away} @ {home}"), sport, [away, home]),
        }
    }

    /// Add a quote for one book and outcome.
    pub fn quote(mut self, book: &str, outcome: &str, american: i64) -> Self {
        self.event.set_quote(Price::new(book, outcome, american));
        self
    }

    /// Quote both sides at one book in a single call.
    pub fn two_way(self, book: &str, away_odds: i64, home_odds: i64) -> Self {
        let away = self.event.outcomes[0].clone();
        let home = self.event.outcomes[1].clone();
        self.quote(book, &away, away_odds).quote(book, &home, home_odds)
    }

    /// Finish building.
    pub fn build(self) -> Event {
        self.event
    }
}
