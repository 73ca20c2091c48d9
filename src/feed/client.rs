//! Odds API client wrapper.
//!
//! Thin retrieval collaborator: fetches h2h moneyline odds for one
//! sport/region and normalizes the response into [`Event`] snapshots.
//! The hedge engine never sees HTTP.

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::FeedError;
use crate::market::{Event, Price, Region};

/// The Odds API client.
#[derive(Debug, Clone)]
pub struct OddsApiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the odds API.
    base_url: String,
    /// API key sent with every request.
    api_key: String,
}

/// Raw event from the odds API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEvent {
    /// Sport key the event belongs to.
    pub sport_key: String,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Per-bookmaker markets.
    #[serde(default)]
    pub bookmakers: Vec<ApiBookmaker>,
}

/// Raw bookmaker entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiBookmaker {
    /// Canonical bookmaker key.
    pub key: String,
    /// Markets the book quotes for this event.
    #[serde(default)]
    pub markets: Vec<ApiMarket>,
}

/// Raw market entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMarket {
    /// Market key ("h2h" is the only one consumed).
    pub key: String,
    /// Quoted outcomes.
    #[serde(default)]
    pub outcomes: Vec<ApiOutcome>,
}

/// Raw outcome quote.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiOutcome {
    /// Outcome label (team name).
    pub name: String,
    /// American odds. The API serializes them as numbers.
    pub price: f64,
}

impl OddsApiClient {
    /// Create a client from config.
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let api_key = config
            .odds_api_key
            .clone()
            .ok_or(FeedError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(2_000))
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.odds_api_url.clone(),
            api_key,
        })
    }

    /// Fetch all h2h events for one sport in one region.
    #[instrument(skip(self))]
    pub async fn fetch_events(
        &self,
        sport_key: &str,
        region: Region,
    ) -> Result<Vec<Event>, FeedError> {
        let url = format!("{}/v4/sports/{}/odds", self.base_url, sport_key);
        let region_key = region.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("regions", region_key.as_str()),
                ("markets", "h2h"),
                ("oddsFormat", "american"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let raw: Vec<ApiEvent> = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        debug!(count = raw.len(), %region, "received events");
        Ok(normalize(raw))
    }
}

/// Normalize raw API events into quote snapshots.
///
/// Only two-outcome h2h markets survive; anything else is logged and
/// dropped. Duplicate quotes from the source fall through to the
/// event's last-write-wins insert.
pub fn normalize(raw: Vec<ApiEvent>) -> Vec<Event> {
    let mut events = Vec::with_capacity(raw.len());

    for api_event in raw {
        let id = format!("{} @ {}", api_event.away_team, api_event.home_team);
        let mut event = Event::new(
            id.as_str(),
            api_event.sport_key.as_str(),
            [api_event.away_team.clone(), api_event.home_team.clone()],
        );

        for bookmaker in api_event.bookmakers {
            for market in bookmaker.markets {
                if market.key != "h2h" {
                    continue;
                }
                if market.outcomes.len() != 2 {
                    warn!(
                        event = %id,
                        book = %bookmaker.key,
                        outcomes = market.outcomes.len(),
                        "skipping non-two-outcome h2h market"
                    );
                    continue;
                }
                for outcome in market.outcomes {
                    event.set_quote(Price::new(
                        bookmaker.key.clone(),
                        outcome.name,
                        outcome.price.round() as i64,
                    ));
                }
            }
        }

        events.push(event);
    }

    events
}
