//! Pricing engine module.
//!
//! Pure quote calculations for rentals plus the HTTP surface the booking
//! pages call into. The calculators never touch I/O; the routes and
//! services wire them to the catalog and the downstream booking handoff.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{price_quote, rental_days, round_money};
pub use models::{AddOn, PriceBreakdown, Quote, QuoteRequest, RentalPeriod};
pub use routes::router;
pub use services::{build_booking_intent, BookingError, BookingIntent};
