//! Request DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{AddOn, QuoteRequest, RentalPeriod};

/// Request to quote a rental.
///
/// Either instant may be absent while the caller is still collecting
/// input; the quote simply comes back incomplete.
#[derive(Debug, Deserialize)]
pub struct QuoteApiRequest {
    #[serde(default)]
    pub pickup_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub return_at: Option<DateTime<Utc>>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_daily_rate: Decimal,
    #[serde(default)]
    pub add_ons: Vec<AddOnSelection>,
}

/// One add-on line in a quote request
#[derive(Debug, Deserialize)]
pub struct AddOnSelection {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    #[serde(default)]
    pub selected: bool,
}

impl QuoteApiRequest {
    pub fn into_quote_request(self) -> QuoteRequest {
        let period = match (self.pickup_at, self.return_at) {
            (Some(pickup_at), Some(return_at)) => Some(RentalPeriod {
                pickup_at,
                return_at,
            }),
            _ => None,
        };
        QuoteRequest {
            period,
            base_daily_rate: self.base_daily_rate,
            add_ons: self
                .add_ons
                .into_iter()
                .map(|a| AddOn {
                    id: a.id,
                    daily_rate: a.daily_rate,
                    selected: a.selected,
                })
                .collect(),
        }
    }
}

/// Request to submit a booking
#[derive(Debug, Deserialize)]
pub struct BookingApiRequest {
    pub car: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
    #[serde(default)]
    pub pickup_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub return_at: Option<DateTime<Utc>>,
    /// Ids of the selected add-ons
    #[serde(default)]
    pub add_ons: Vec<String>,
}
