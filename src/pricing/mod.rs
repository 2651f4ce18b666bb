//! Pricing computation engine.
//!
//! Pure functions turning a [`Configuration`] into a priced breakdown.
//! No I/O and no shared mutable state: identical inputs always produce
//! identical outputs, so every calculator is safe to call concurrently and
//! the composed quote is safe to memoize on its input (see `crate::cache`).
//! The host UI talks to this module over HTTP/JSON via `routes`.

pub mod composer;
pub mod config;
pub mod discounts;
pub mod enterprise;
pub mod modules;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod tier;
pub mod watchtower;

// Re-export commonly used items
pub use composer::{calculate_full_price, PriceResult, Quote};
pub use config::{ClientProfile, Configuration};
pub use discounts::{apply_discounts, DiscountLine};
pub use routes::router;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Pricing calculation error types.
///
/// Unknown catalog ids fail loudly here rather than pricing as a silent $0
/// line item; `locations < 1` is rejected at the request boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("unknown product layer: {id}")]
    UnknownLayer { id: String },

    #[error("unknown tier: {id}")]
    UnknownTier { id: String },

    #[error("unknown module: {id}")]
    UnknownModule { id: String },

    #[error("unknown watchtower selection: {id}")]
    UnknownWatchtowerId { id: String },

    #[error("unknown client type: {id}")]
    UnknownClientType { id: String },

    #[error("location count must be at least 1 (got {locations})")]
    InvalidLocations { locations: u32 },

    #[error("enterprise pricing starts at {threshold} locations (got {locations})")]
    NotEnterpriseScale { locations: u32, threshold: u32 },

    #[error("catalog integrity violation: {message}")]
    CatalogIntegrity { message: String },
}

/// Round to specified decimal places using banker's rounding
/// (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is
/// exactly halfway between two possibilities, which avoids cumulative bias
/// across many quotes. Applied once per derived output (final total,
/// per-location share), never between discount steps.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use sundae_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// One line of a priced breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub item: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BreakdownLine {
    pub fn new(item: impl Into<String>, price: Decimal) -> Self {
        BreakdownLine {
            item: item.into(),
            price,
            note: None,
        }
    }

    pub fn with_note(item: impl Into<String>, price: Decimal, note: impl Into<String>) -> Self {
        BreakdownLine {
            item: item.into(),
            price,
            note: Some(note.into()),
        }
    }
}
