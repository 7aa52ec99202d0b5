//! Domain types for rental quotes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A pickup/return pair of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    pub pickup_at: DateTime<Utc>,
    pub return_at: DateTime<Utc>,
}

impl RentalPeriod {
    /// True when the return instant is strictly after pickup. A period of
    /// zero elapsed time is invalid, not a zero-day rental.
    pub fn is_valid(&self) -> bool {
        self.return_at > self.pickup_at
    }
}

/// An optional extra billed per rental day when selected.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOn {
    /// Unique within a request
    pub id: String,
    pub daily_rate: Decimal,
    pub selected: bool,
}

/// Everything needed to price one rental. Rebuilt fresh on every input
/// change; nothing here has identity across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    /// None until both endpoints have been chosen
    pub period: Option<RentalPeriod>,
    pub base_daily_rate: Decimal,
    /// Ordered; totals come back in the same order
    pub add_ons: Vec<AddOn>,
}

/// Per-add-on share of a quote, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddOnTotal {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// A fully priced rental.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_total: Decimal,
    pub add_on_totals: Vec<AddOnTotal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub grand_total: Decimal,
}

/// Outcome of pricing a request.
///
/// Incomplete is the normal state while the visitor is still picking
/// dates (an endpoint missing, or return not strictly after pickup) - it
/// is not an error, and callers render it as blanked/zeroed fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Quote {
    Incomplete,
    Priced(PriceBreakdown),
}

impl Quote {
    pub fn is_priced(&self) -> bool {
        matches!(self, Quote::Priced(_))
    }

    pub fn breakdown(&self) -> Option<&PriceBreakdown> {
        match self {
            Quote::Priced(breakdown) => Some(breakdown),
            Quote::Incomplete => None,
        }
    }
}
