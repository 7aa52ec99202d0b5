//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O, no stored state. Every call
//! prices the request it is given from scratch, so two calls with the
//! same input produce identical output.

use rust_decimal::{Decimal, RoundingStrategy};

use super::models::{AddOnTotal, PriceBreakdown, Quote, QuoteRequest, RentalPeriod};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Round to the given number of decimal places using half-up rounding
/// (midpoint away from zero).
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Billable days for a period: the absolute elapsed time, including
/// time-of-day, split into 24-hour blocks and rounded up. A 25-hour
/// rental bills as 2 days.
///
/// Returns `None` when the return is not strictly after the pickup -
/// undefined rather than zero, since partial input during interactive
/// selection is expected.
pub fn rental_days(period: &RentalPeriod) -> Option<i64> {
    if !period.is_valid() {
        return None;
    }
    let elapsed_ms = (period.return_at - period.pickup_at).num_milliseconds();
    Some((elapsed_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
}

/// Price a rental request.
///
/// A missing or invalid period yields [`Quote::Incomplete`]. Otherwise
/// the base and each selected add-on bill their daily rate for the full
/// day count; unselected add-ons appear in the breakdown with a zero
/// total regardless of their rate. Totals are rounded to 2 decimal
/// places half-up, and the grand total is the sum of the rounded parts,
/// so the breakdown always adds up exactly.
pub fn price_quote(request: &QuoteRequest) -> Quote {
    let Some(period) = request.period else {
        return Quote::Incomplete;
    };
    let Some(days) = rental_days(&period) else {
        return Quote::Incomplete;
    };

    let day_factor = Decimal::from(days);
    let base_total = round_money(request.base_daily_rate * day_factor, 2);

    let mut grand_total = base_total;
    let mut add_on_totals = Vec::with_capacity(request.add_ons.len());
    for add_on in &request.add_ons {
        let total = if add_on.selected {
            round_money(add_on.daily_rate * day_factor, 2)
        } else {
            Decimal::ZERO
        };
        grand_total += total;
        add_on_totals.push(AddOnTotal {
            id: add_on.id.clone(),
            total,
        });
    }

    Quote::Priced(PriceBreakdown {
        days,
        base_total,
        add_on_totals,
        grand_total,
    })
}
