//! Odds feed module.
//!
//! This module handles:
//! - The Odds API HTTP client and response normalization
//! - Cross-region event merging
//! - Mock feed for testing

pub mod client;
pub mod mock;

pub use client::OddsApiClient;
pub use mock::MockEventBuilder;

use std::collections::HashMap;

use crate::market::Event;

/// Merge event batches fetched from different regions.
///
/// The same matchup shows up once per region with disjoint bookmaker
/// sets; quotes are folded together keyed by (sport, event id) so a
/// us-region bonus book can pair with a us2-region hedge book. Output
/// is sorted by id for deterministic downstream scans.
pub fn merge_events(batches: impl IntoIterator<Item = Vec<Event>>) -> Vec<Event> {
    let mut merged: HashMap<(String, String), Event> = HashMap::new();

    for batch in batches {
        for event in batch {
            let key = (event.sport.clone(), event.id.clone());
            match merged.get_mut(&key) {
                Some(existing) => existing.merge(event),
                None => {
                    merged.insert(key, event);
                }
            }
        }
    }

    let mut events: Vec<Event> = merged.into_values().collect();
    events.sort_by(|a, b| a.sport.cmp(&b.sport).then_with(|| a.id.cmp(&b.id)));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_folds_same_event_across_regions() {
        let us = MockEventBuilder::matchup("A", "B", "basketball_nba")
            .quote("fanduel", "A", 300)
            .build();
        let us2 = MockEventBuilder::matchup("A", "B", "basketball_nba")
            .quote("espnbet", "B", -350)
            .build();

        let merged = merge_events([vec![us], vec![us2]]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quote("fanduel", "A"), Some(300));
        assert_eq!(merged[0].quote("espnbet", "B"), Some(-350));
    }

    #[test]
    fn merge_keeps_distinct_events_apart() {
        let a = MockEventBuilder::matchup("A", "B", "basketball_nba").build();
        let b = MockEventBuilder::matchup("C", "D", "basketball_nba").build();
        let c = MockEventBuilder::matchup("A", "B", "baseball_mlb").build();

        let merged = merge_events([vec![a, b, c]]);
        assert_eq!(merged.len(), 3);
        // sorted by sport, then id
        assert_eq!(merged[0].sport, "baseball_mlb");
        assert_eq!(merged[1].id, "A @ B");
        assert_eq!(merged[2].id, "C @ D");
    }
}
