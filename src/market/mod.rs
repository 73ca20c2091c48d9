//! Market data module.
//!
//! This module handles:
//! - Event and price snapshot types
//! - Bookmaker alias and region lookup tables
//! - Sport key resolution

pub mod books;
pub mod types;

pub use books::{regions_needed, resolve_book, sport_key, Region};
pub use types::{Event, Price};
