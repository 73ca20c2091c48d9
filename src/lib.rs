//! Sportsbook bonus-bet hedge finder.
//!
//! A bonus bet returns profit only: if it wins the stake is kept by the
//! book, if it loses nothing comes back. Hedging it with a cash wager on
//! the complementary outcome at another book locks in the same profit
//! either way:
//!
//! ```text
//! Bonus:  fanduel   | Milwaukee Bucks @ +525         ($10 bonus)
//! Hedge:  draftkings | Oklahoma City Thunder @ -600  ($45.00 cash)
//! ─────────────────────────────────────────────────
//! Locked profit: $7.50 regardless of result (75.00% efficiency)
//! ```
//!
//! The engine converts American moneylines to decimal odds, derives the
//! break-even hedge stake per (bonus-book, hedge-book) pair, and ranks
//! every qualifying pairing across all supplied events.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`market`]: Event/price snapshots and bookmaker tables
//! - [`hedge`]: Odds conversion and opportunity scanning
//! - [`feed`]: Odds API retrieval and normalization

pub mod config;
pub mod error;
pub mod feed;
pub mod hedge;
pub mod market;

pub use config::Config;
pub use error::{HedgeError, Result};
