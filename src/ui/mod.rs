//! Presentation state controllers.
//!
//! Interactive behavior is modeled as explicit state plus pure
//! `(state, event) -> state` transitions. Route handlers build the state
//! from request input, apply events, and re-render whole pages from the
//! result; nothing patches a previous render in place.

pub mod booking;
pub mod chrome;

pub use booking::{BookingForm, DateRangeSource, FormEvent, RangeSelection};
pub use chrome::{ChromeEvent, ChromeState, NavTab};
