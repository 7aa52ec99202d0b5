//! Booking submission service.
//!
//! Validates a submitted booking against the catalog, prices it, and
//! packages the handoff payload for the downstream reservation flow. The
//! downstream side is an opaque collaborator; nothing is persisted here.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::Catalog;

use super::calculators::price_quote;
use super::models::{AddOn, PriceBreakdown, Quote, QuoteRequest, RentalPeriod};
use super::requests::BookingApiRequest;

/// Payload handed to the downstream reservation process
#[derive(Debug, Clone, serde::Serialize)]
pub struct BookingIntent {
    pub reference: Uuid,
    pub car: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_at: DateTime<Utc>,
    pub return_at: DateTime<Utc>,
    /// Selected add-on ids, catalog order
    pub add_ons: Vec<String>,
    pub quote: PriceBreakdown,
}

/// Booking submission error types.
///
/// These cover submission-time validation only; an in-progress form with
/// missing dates is an incomplete quote, not one of these.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown car: {0}")]
    UnknownCar(String),

    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    #[error("Return must be strictly after pickup")]
    InvalidPeriod,
}

impl BookingError {
    pub fn error_type(&self) -> &'static str {
        match self {
            BookingError::MissingField(_) => "missing_field",
            BookingError::UnknownCar(_) => "unknown_car",
            BookingError::UnknownAddOn(_) => "unknown_add_on",
            BookingError::InvalidPeriod => "invalid_period",
        }
    }
}

/// Validate a booking submission and build the handoff payload.
///
/// All required fields must be present, the car and every add-on id must
/// exist in the catalog, and the period must price to a complete quote.
pub fn build_booking_intent(
    catalog: &Catalog,
    submission: &BookingApiRequest,
) -> Result<BookingIntent, BookingError> {
    if submission.pickup_location.trim().is_empty() {
        return Err(BookingError::MissingField("pickup_location"));
    }
    if submission.dropoff_location.trim().is_empty() {
        return Err(BookingError::MissingField("dropoff_location"));
    }
    let pickup_at = submission
        .pickup_at
        .ok_or(BookingError::MissingField("pickup_at"))?;
    let return_at = submission
        .return_at
        .ok_or(BookingError::MissingField("return_at"))?;

    let car = catalog
        .car(&submission.car)
        .ok_or_else(|| BookingError::UnknownCar(submission.car.clone()))?;
    for id in &submission.add_ons {
        if catalog.add_on(id).is_none() {
            return Err(BookingError::UnknownAddOn(id.clone()));
        }
    }

    // The full catalog lineup goes into the quote; unselected add-ons
    // price to zero but stay visible in the breakdown.
    let add_ons: Vec<AddOn> = catalog
        .add_ons()
        .iter()
        .map(|a| AddOn {
            id: a.id.clone(),
            daily_rate: a.daily_rate,
            selected: submission.add_ons.iter().any(|s| s == &a.id),
        })
        .collect();

    let request = QuoteRequest {
        period: Some(RentalPeriod {
            pickup_at,
            return_at,
        }),
        base_daily_rate: car.daily_rate,
        add_ons,
    };

    let quote = match price_quote(&request) {
        Quote::Priced(breakdown) => breakdown,
        Quote::Incomplete => return Err(BookingError::InvalidPeriod),
    };

    let selected: Vec<String> = catalog
        .add_ons()
        .iter()
        .filter(|a| submission.add_ons.iter().any(|s| s == &a.id))
        .map(|a| a.id.clone())
        .collect();

    Ok(BookingIntent {
        reference: Uuid::new_v4(),
        car: car.slug.clone(),
        pickup_location: submission.pickup_location.trim().to_string(),
        dropoff_location: submission.dropoff_location.trim().to_string(),
        pickup_at,
        return_at,
        add_ons: selected,
        quote,
    })
}
