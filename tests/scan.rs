//! End-to-end scan tests over mock events.
//!
//! Exercises the full path the binary takes after fetching: normalize
//! raw feed JSON, merge regions, scan, and render the best opportunity.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use bonus_hedge::feed::client::{normalize, ApiEvent};
use bonus_hedge::feed::{merge_events, MockEventBuilder};
use bonus_hedge::hedge::scan;

fn hedge_books(books: &[&str]) -> HashSet<String> {
    books.iter().map(|b| b.to_string()).collect()
}

#[test]
fn feed_json_to_best_opportunity() {
    let body = r#"[{
        "sport_key": "basketball_nba",
        "home_team": "Oklahoma City Thunder",
        "away_team": "Milwaukee Bucks",
        "bookmakers": [
            {
                "key": "fanduel",
                "markets": [{
                    "key": "h2h",
                    "outcomes": [
                        {"name": "Milwaukee Bucks", "price": 525},
                        {"name": "Oklahoma City Thunder", "price": -560}
                    ]
                }]
            },
            {
                "key": "draftkings",
                "markets": [{
                    "key": "h2h",
                    "outcomes": [
                        {"name": "Milwaukee Bucks", "price": 495},
                        {"name": "Oklahoma City Thunder", "price": -600}
                    ]
                }]
            }
        ]
    }]"#;

    let raw: Vec<ApiEvent> = serde_json::from_str(body).unwrap();
    let events = merge_events([normalize(raw)]);

    let report = scan(
        &events,
        "fanduel",
        &hedge_books(&["draftkings"]),
        dec!(10),
        dec!(0),
    );

    let best = report.best().expect("opportunity");
    assert_eq!(
        best.to_string(),
        "Event: Milwaukee Bucks @ Oklahoma City Thunder\n\
         Bonus: fanduel | Milwaukee Bucks @ +525\n\
         Hedge: draftkings | Oklahoma City Thunder @ -600\n\
         Hedge stake: $45.00\n\
         Locked profit: $7.50\n\
         Efficiency: 75.00%"
    );
}

#[test]
fn cross_region_books_pair_up() {
    // fanduel arrives in the us batch, espnbet in us2; the merged event
    // must let them hedge each other.
    let us = MockEventBuilder::matchup("Dallas Mavericks", "Los Angeles Lakers", "basketball_nba")
        .quote("fanduel", "Dallas Mavericks", 260)
        .build();
    let us2 = MockEventBuilder::matchup("Dallas Mavericks", "Los Angeles Lakers", "basketball_nba")
        .quote("espnbet", "Los Angeles Lakers", -305)
        .build();

    let events = merge_events([vec![us], vec![us2]]);
    let report = scan(
        &events,
        "fanduel",
        &hedge_books(&["espnbet"]),
        dec!(250),
        dec!(0),
    );

    let best = report.best().expect("opportunity");
    assert_eq!(best.hedge_book, "espnbet");
    assert_eq!(best.hedge_stake.round_dp(2), dec!(489.51));
    assert_eq!(best.locked_profit.round_dp(2), dec!(160.49));
    assert_eq!(best.efficiency_pct().round_dp(2), dec!(64.20));
}

#[test]
fn best_opportunity_wins_across_events_and_books() {
    let e1 = MockEventBuilder::matchup("A", "B", "basketball_nba")
        .quote("fanduel", "A", 200)
        .quote("draftkings", "B", -250)
        .quote("betmgm", "B", -180)
        .build();
    let e2 = MockEventBuilder::matchup("C", "D", "basketball_ncaab")
        .quote("fanduel", "C", 600)
        .quote("draftkings", "D", -700)
        .build();

    let events = merge_events([vec![e1, e2]]);
    let report = scan(
        &events,
        "fanduel",
        &hedge_books(&["draftkings", "betmgm"]),
        dec!(100),
        dec!(0),
    );

    assert_eq!(report.opportunities.len(), 3);
    // +600 against -700 recovers the largest fraction of the bonus
    let best = report.best().unwrap();
    assert_eq!(best.event_id, "C @ D");
    assert_eq!(best.hedge_book, "draftkings");
    for pair in report.opportunities.windows(2) {
        assert!(pair[0].efficiency >= pair[1].efficiency);
    }
}

#[test]
fn empty_scan_is_not_an_error() {
    let events = merge_events([Vec::new()]);
    let report = scan(
        &events,
        "fanduel",
        &hedge_books(&["draftkings"]),
        dec!(100),
        dec!(0),
    );
    assert!(report.opportunities.is_empty());
    assert!(report.best().is_none());
}
