//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{AddOnRate, Car};

use super::models::PriceBreakdown;

/// Quote for JSON responses.
///
/// An incomplete quote serializes with `complete: false` and every
/// amount zeroed, so the caller can blank its whole display in one pass.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub complete: bool,
    pub days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_total: Decimal,
    pub add_ons: Vec<AddOnTotalResponse>,
    #[serde(with = "rust_decimal::serde::str")]
    pub grand_total: Decimal,
}

/// One add-on line in a quote response, in request order
#[derive(Debug, Serialize)]
pub struct AddOnTotalResponse {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl QuoteResponse {
    pub fn from_breakdown(breakdown: &PriceBreakdown) -> Self {
        Self {
            complete: true,
            days: breakdown.days,
            base_total: breakdown.base_total,
            add_ons: breakdown
                .add_on_totals
                .iter()
                .map(|t| AddOnTotalResponse {
                    id: t.id.clone(),
                    total: t.total,
                })
                .collect(),
            grand_total: breakdown.grand_total,
        }
    }

    /// Zeroed response for a request whose date range is still missing
    /// or invalid. Carries the requested add-on ids so each display
    /// field can be reset individually.
    pub fn incomplete(add_on_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            complete: false,
            days: 0,
            base_total: Decimal::ZERO,
            add_ons: add_on_ids
                .into_iter()
                .map(|id| AddOnTotalResponse {
                    id,
                    total: Decimal::ZERO,
                })
                .collect(),
            grand_total: Decimal::ZERO,
        }
    }
}

/// Response for an accepted booking submission
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub reference: Uuid,
    /// Where the caller should send the visitor next
    pub redirect: String,
    pub quote: QuoteResponse,
}

/// Rate table exposed to the browser
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub cars: Vec<Car>,
    pub add_ons: Vec<AddOnRate>,
}

/// Generic booking error response
#[derive(Debug, Serialize)]
pub struct BookingErrorResponse {
    pub error_type: String,
    pub message: String,
}
