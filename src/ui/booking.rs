//! Booking form state.
//!
//! Pickup/return selection and add-on flags live in one explicit value.
//! Every change goes through [`apply`] and callers rebuild a fresh
//! [`QuoteRequest`] afterwards - a stale breakdown is never patched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::catalog::AddOnRate;
use crate::pricing::{AddOn, QuoteRequest, RentalPeriod};

/// The pickup/return pair as chosen so far, possibly partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    pub pickup_at: Option<DateTime<Utc>>,
    pub return_at: Option<DateTime<Utc>>,
}

/// Adapter over whatever widget collects the two instants, so the form
/// never reads a picker's internals directly.
pub trait DateRangeSource {
    fn selected_range(&self) -> RangeSelection;
}

/// Booking calculator form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub pickup_at: Option<DateTime<Utc>>,
    pub return_at: Option<DateTime<Utc>>,
    /// Ids of the add-ons currently ticked
    pub selected_add_ons: Vec<String>,
}

/// Form interaction events
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    PickupChosen(DateTime<Utc>),
    PickupCleared,
    ReturnChosen(DateTime<Utc>),
    ReturnCleared,
    AddOnToggled(String),
}

impl BookingForm {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed the date fields from a range source (the date-picker
    /// adapter), keeping the ordering rule: an initial return that is
    /// not strictly after the pickup is treated as unset.
    pub fn from_source(source: &impl DateRangeSource, selected_add_ons: Vec<String>) -> Self {
        let range = source.selected_range();
        let mut form = BookingForm {
            selected_add_ons,
            ..BookingForm::empty()
        };
        if let Some(at) = range.return_at {
            form = apply(form, FormEvent::ReturnChosen(at));
        }
        if let Some(at) = range.pickup_at {
            form = apply(form, FormEvent::PickupChosen(at));
        }
        form
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_add_ons.iter().any(|s| s == id)
    }

    /// Build a fresh pricing request from the current state and the rate
    /// table. The whole catalog lineup goes in; unselected add-ons carry
    /// their rate but price to zero.
    pub fn quote_request(&self, base_daily_rate: Decimal, add_ons: &[AddOnRate]) -> QuoteRequest {
        let period = match (self.pickup_at, self.return_at) {
            (Some(pickup_at), Some(return_at)) => Some(RentalPeriod {
                pickup_at,
                return_at,
            }),
            _ => None,
        };
        QuoteRequest {
            period,
            base_daily_rate,
            add_ons: add_ons
                .iter()
                .map(|a| AddOn {
                    id: a.id.clone(),
                    daily_rate: a.daily_rate,
                    selected: self.is_selected(&a.id),
                })
                .collect(),
        }
    }
}

/// Pure form transition.
///
/// Choosing a pickup drops any held return that is not strictly after
/// it, so the form never carries an inverted pair forward; the visitor
/// is asked for a new return instead.
pub fn apply(form: BookingForm, event: FormEvent) -> BookingForm {
    match event {
        FormEvent::PickupChosen(at) => BookingForm {
            return_at: form.return_at.filter(|r| *r > at),
            pickup_at: Some(at),
            ..form
        },
        FormEvent::PickupCleared => BookingForm {
            pickup_at: None,
            ..form
        },
        FormEvent::ReturnChosen(at) => BookingForm {
            return_at: Some(at),
            ..form
        },
        FormEvent::ReturnCleared => BookingForm {
            return_at: None,
            ..form
        },
        FormEvent::AddOnToggled(id) => {
            let mut selected = form.selected_add_ons;
            match selected.iter().position(|s| *s == id) {
                Some(index) => {
                    selected.remove(index);
                }
                None => selected.push(id),
            }
            BookingForm {
                selected_add_ons: selected,
                ..form
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_pickup_after_return_drops_the_return() {
        let form = apply(BookingForm::empty(), FormEvent::ReturnChosen(at(3, 10)));
        let form = apply(form, FormEvent::PickupChosen(at(4, 10)));
        assert_eq!(form.pickup_at, Some(at(4, 10)));
        assert_eq!(form.return_at, None);
    }

    #[test]
    fn test_pickup_equal_to_return_drops_the_return() {
        let form = apply(BookingForm::empty(), FormEvent::ReturnChosen(at(3, 10)));
        let form = apply(form, FormEvent::PickupChosen(at(3, 10)));
        assert_eq!(form.return_at, None);
    }

    #[test]
    fn test_earlier_pickup_keeps_the_return() {
        let form = apply(BookingForm::empty(), FormEvent::ReturnChosen(at(3, 10)));
        let form = apply(form, FormEvent::PickupChosen(at(1, 10)));
        assert_eq!(form.return_at, Some(at(3, 10)));
    }

    #[test]
    fn test_add_on_toggle_round_trips() {
        let form = apply(
            BookingForm::empty(),
            FormEvent::AddOnToggled("gps".to_string()),
        );
        assert!(form.is_selected("gps"));
        let form = apply(form, FormEvent::AddOnToggled("gps".to_string()));
        assert!(!form.is_selected("gps"));
    }

    #[test]
    fn test_quote_request_incomplete_until_both_dates() {
        let catalog = Catalog::standard();
        let form = apply(BookingForm::empty(), FormEvent::PickupChosen(at(1, 10)));
        let request = form.quote_request(dec!(89), catalog.add_ons());
        assert!(request.period.is_none());

        let form = apply(form, FormEvent::ReturnChosen(at(3, 10)));
        let request = form.quote_request(dec!(89), catalog.add_ons());
        assert!(request.period.is_some());
    }

    #[test]
    fn test_quote_request_carries_whole_lineup() {
        let catalog = Catalog::standard();
        let form = apply(
            BookingForm::empty(),
            FormEvent::AddOnToggled("gps".to_string()),
        );
        let request = form.quote_request(dec!(89), catalog.add_ons());
        assert_eq!(request.add_ons.len(), catalog.add_ons().len());
        assert!(request.add_ons.iter().any(|a| a.id == "gps" && a.selected));
        assert!(request
            .add_ons
            .iter()
            .any(|a| a.id == "insurance" && !a.selected));
    }

    #[test]
    fn test_from_source_applies_ordering_rule() {
        struct Fixed(RangeSelection);
        impl DateRangeSource for Fixed {
            fn selected_range(&self) -> RangeSelection {
                self.0
            }
        }

        let source = Fixed(RangeSelection {
            pickup_at: Some(at(5, 10)),
            return_at: Some(at(4, 10)),
        });
        let form = BookingForm::from_source(&source, vec![]);
        assert_eq!(form.pickup_at, Some(at(5, 10)));
        assert_eq!(form.return_at, None);
    }
}
