//! Hedge engine: odds conversion and opportunity scanning.
//!
//! This module handles:
//! - American-to-decimal odds conversion
//! - Break-even hedge stake and locked-profit derivation
//! - Candidate enumeration, filtering, and deterministic ranking

pub mod converter;
pub mod scanner;

pub use converter::{compute_hedge, to_decimal_odds, HedgeMetrics};
pub use scanner::{scan, Opportunity, ScanReport, Skip, SkipReason};
