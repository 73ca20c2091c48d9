//! Hedge opportunity scanning across events and book pairs.

use std::collections::HashSet;

use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::{debug, instrument, warn};

use super::converter::{compute_hedge, to_decimal_odds, HedgeMetrics};
use crate::error::{EventError, OddsError};
use crate::market::Event;

/// One evaluated (bonus-book, hedge-book) pairing for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    /// Event the pairing belongs to.
    pub event_id: String,
    /// Sport key of the event.
    pub sport: String,
    /// Book holding the bonus bet.
    pub bonus_book: String,
    /// Outcome the bonus bet backs.
    pub bonus_outcome: String,
    /// Bonus book's American odds on that outcome.
    pub bonus_odds: i64,
    /// Book taking the hedge wager.
    pub hedge_book: String,
    /// Complementary outcome the hedge backs.
    pub hedge_outcome: String,
    /// Hedge book's American odds on the complementary outcome.
    pub hedge_odds: i64,
    /// Face value of the bonus bet.
    pub bonus_stake: Decimal,
    /// Derived cash stake on the hedge side.
    pub hedge_stake: Decimal,
    /// Derived profit locked in either way.
    pub locked_profit: Decimal,
    /// Locked profit over bonus stake.
    pub efficiency: Decimal,
    /// When the pairing was evaluated.
    pub detected_at: OffsetDateTime,
}

impl Opportunity {
    /// Efficiency as a percentage.
    pub fn efficiency_pct(&self) -> Decimal {
        self.efficiency * Decimal::ONE_HUNDRED
    }
}

impl std::fmt::Display for Opportunity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Event: {}", self.event_id)?;
        writeln!(
            f,
            "Bonus: {} | {} @ {:+}",
            self.bonus_book, self.bonus_outcome, self.bonus_odds
        )?;
        writeln!(
            f,
            "Hedge: {} | {} @ {:+}",
            self.hedge_book, self.hedge_outcome, self.hedge_odds
        )?;
        writeln!(f, "Hedge stake: ${:.2}", self.hedge_stake.round_dp(2))?;
        writeln!(f, "Locked profit: ${:.2}", self.locked_profit.round_dp(2))?;
        write!(f, "Efficiency: {:.2}%", self.efficiency_pct().round_dp(2))
    }
}

/// Why a candidate never became an opportunity.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The event itself could not be scanned.
    MalformedEvent(EventError),
    /// One price pair had unusable odds; other pairs still scan.
    InvalidOdds(OddsError),
}

/// Diagnostic record for a skipped event or pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    /// Event that produced the skip.
    pub event_id: String,
    /// Hedge book involved, if the skip was pair-level.
    pub hedge_book: Option<String>,
    /// What went wrong.
    pub reason: SkipReason,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match &self.reason {
            SkipReason::MalformedEvent(e) => e.to_string(),
            SkipReason::InvalidOdds(e) => e.to_string(),
        };
        match &self.hedge_book {
            Some(book) => write!(f, "{} vs {}: {}", self.event_id, book, reason),
            None => write!(f, "{}: {}", self.event_id, reason),
        }
    }
}

/// Everything a scan produced: ranked opportunities plus the skip
/// records the caller may want to log.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Qualifying opportunities, best first.
    pub opportunities: Vec<Opportunity>,
    /// Candidates discarded with a diagnostic.
    pub skipped: Vec<Skip>,
}

impl ScanReport {
    /// The highest-ranked opportunity, if any qualified.
    pub fn best(&self) -> Option<&Opportunity> {
        self.opportunities.first()
    }
}

/// Enumerate every (bonus-book, hedge-book) pairing across `events` and
/// rank the qualifying ones.
///
/// For each outcome the bonus book prices, every hedge book quoting the
/// complementary outcome is evaluated. Self-pairs are excluded, missing
/// quotes contribute nothing, and candidates below `min_efficiency` (or
/// with a non-positive hedge stake) are dropped. The result is sorted
/// by efficiency descending, ties by locked profit descending, then by
/// event id, so identical input always yields identical output.
#[instrument(skip(events, hedge_books), fields(events = events.len(), bonus_book = %bonus_book))]
pub fn scan(
    events: &[Event],
    bonus_book: &str,
    hedge_books: &HashSet<String>,
    bonus_stake: Decimal,
    min_efficiency: Decimal,
) -> ScanReport {
    let mut report = ScanReport::default();

    for event in events {
        if let Err(e) = event.validate() {
            warn!(event = %event.id, error = %e, "skipping malformed event");
            report.skipped.push(Skip {
                event_id: event.id.clone(),
                hedge_book: None,
                reason: SkipReason::MalformedEvent(e),
            });
            continue;
        }

        scan_event(
            event,
            bonus_book,
            hedge_books,
            bonus_stake,
            min_efficiency,
            &mut report,
        );
    }

    report.opportunities.sort_by(|a, b| {
        b.efficiency
            .cmp(&a.efficiency)
            .then_with(|| b.locked_profit.cmp(&a.locked_profit))
            .then_with(|| a.event_id.cmp(&b.event_id))
    });

    debug!(
        opportunities = report.opportunities.len(),
        skipped = report.skipped.len(),
        "scan complete"
    );
    report
}

/// Evaluate all pairings for one validated event.
fn scan_event(
    event: &Event,
    bonus_book: &str,
    hedge_books: &HashSet<String>,
    bonus_stake: Decimal,
    min_efficiency: Decimal,
    report: &mut ScanReport,
) {
    for bonus_outcome in &event.outcomes {
        let Some(bonus_odds) = event.quote(bonus_book, bonus_outcome) else {
            continue;
        };
        // validate() guarantees the complement exists
        let Some(hedge_outcome) = event.opposite(bonus_outcome) else {
            continue;
        };

        for hedge_book in hedge_books {
            // A book cannot hedge against itself.
            if hedge_book == bonus_book {
                continue;
            }
            let Some(hedge_odds) = event.quote(hedge_book, hedge_outcome) else {
                continue;
            };

            match evaluate_pair(bonus_odds, hedge_odds, bonus_stake) {
                Ok(metrics) => {
                    if metrics.efficiency < min_efficiency
                        || metrics.hedge_stake <= Decimal::ZERO
                    {
                        debug!(
                            event = %event.id,
                            hedge_book = %hedge_book,
                            efficiency = %metrics.efficiency,
                            "below threshold"
                        );
                        continue;
                    }
                    report.opportunities.push(Opportunity {
                        event_id: event.id.clone(),
                        sport: event.sport.clone(),
                        bonus_book: bonus_book.to_string(),
                        bonus_outcome: bonus_outcome.clone(),
                        bonus_odds,
                        hedge_book: hedge_book.clone(),
                        hedge_outcome: hedge_outcome.to_string(),
                        hedge_odds,
                        bonus_stake,
                        hedge_stake: metrics.hedge_stake,
                        locked_profit: metrics.locked_profit,
                        efficiency: metrics.efficiency,
                        detected_at: OffsetDateTime::now_utc(),
                    });
                }
                Err(e) => {
                    warn!(
                        event = %event.id,
                        hedge_book = %hedge_book,
                        error = %e,
                        "skipping pair with unusable odds"
                    );
                    report.skipped.push(Skip {
                        event_id: event.id.clone(),
                        hedge_book: Some(hedge_book.clone()),
                        reason: SkipReason::InvalidOdds(e),
                    });
                }
            }
        }
    }
}

/// Convert one American pair and derive its hedge economics.
fn evaluate_pair(
    bonus_american: i64,
    hedge_american: i64,
    bonus_stake: Decimal,
) -> Result<HedgeMetrics, OddsError> {
    let bonus_decimal = to_decimal_odds(bonus_american)?;
    let hedge_decimal = to_decimal_odds(hedge_american)?;
    compute_hedge(bonus_decimal, hedge_decimal, bonus_stake)
}
