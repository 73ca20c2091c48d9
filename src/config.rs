//! Application configuration loaded from environment variables.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Odds API ===
    /// API key for the odds source. Required for fetching; the engine
    /// itself never touches it.
    #[serde(default)]
    pub odds_api_key: Option<String>,

    /// Odds API base URL.
    #[serde(default = "default_odds_api_url")]
    pub odds_api_url: String,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // === Hedge Parameters ===
    /// Face value of the bonus bet.
    #[serde(default = "default_bonus_stake")]
    pub bonus_stake: Decimal,

    /// Minimum efficiency (locked profit / stake) to keep an opportunity.
    #[serde(default)]
    pub min_efficiency: Decimal,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_odds_api_url() -> String {
    "https://api.the-odds-api.com".to_string()
}

fn default_http_timeout_ms() -> u64 {
    30_000
}

fn default_bonus_stake() -> Decimal {
    Decimal::new(250, 0) // $250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.bonus_stake <= Decimal::ZERO {
            return Err("BONUS_STAKE must be positive".to_string());
        }

        if self.min_efficiency > Decimal::ONE {
            return Err("MIN_EFFICIENCY cannot exceed 1.0".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be positive".to_string());
        }

        Ok(())
    }
}
