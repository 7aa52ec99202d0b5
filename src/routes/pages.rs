//! Page handlers
//!
//! Every page renders wholesale from explicit state: the handler parses
//! its inputs, applies events to the chrome and form state, computes the
//! full quote, and hands the template a complete set of display fields.

use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{AppError, Result};
use crate::pricing::price_quote;
use crate::ui::booking::{self, BookingForm, FormEvent};
use crate::ui::chrome::{self, ChromeEvent, ChromeState, NavTab};
use crate::AppState;

const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/fleet", get(fleet))
        .route("/book/:car", get(book))
        .route("/theme/toggle", post(toggle_theme))
}

/// One car card on the fleet page
struct CarRow {
    slug: String,
    name: String,
    category: String,
    daily_rate: String,
}

/// Fleet listing template
#[derive(Template)]
#[template(path = "fleet.html")]
struct FleetTemplate {
    body_class: &'static str,
    menu_open: bool,
    active_home: bool,
    active_fleet: bool,
    active_booking: bool,
    cars: Vec<CarRow>,
}

/// One add-on line on the booking page
struct AddOnRow {
    id: String,
    label: String,
    daily_rate: String,
    selected: bool,
    total: String,
}

/// Booking calculator template
#[derive(Template)]
#[template(path = "booking.html")]
struct BookingTemplate {
    body_class: &'static str,
    menu_open: bool,
    active_home: bool,
    active_fleet: bool,
    active_booking: bool,
    car_slug: String,
    car_name: String,
    daily_rate: String,
    pickup_value: String,
    return_value: String,
    complete: bool,
    days: String,
    base_total: String,
    add_ons: Vec<AddOnRow>,
    grand_total: String,
}

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Parse a `datetime-local` form value. Anything malformed counts as
/// "not chosen yet", never as an error.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), DATETIME_LOCAL_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

fn page_chrome(state: &AppState, path: &str, params: &HashMap<String, String>) -> ChromeState {
    let mut chrome_state = ChromeState::new(state.prefs.theme(), NavTab::for_path(path));
    if params.get("menu").map(String::as_str) == Some("open") {
        chrome_state = chrome::apply(chrome_state, ChromeEvent::MenuToggled);
    }
    chrome_state
}

fn fleet_page(state: &AppState, chrome_state: &ChromeState) -> Result<Html<String>> {
    let template = FleetTemplate {
        body_class: chrome_state.theme.body_class(),
        menu_open: chrome_state.menu_open,
        active_home: chrome_state.active_tab == NavTab::Home,
        active_fleet: chrome_state.active_tab == NavTab::Fleet,
        active_booking: chrome_state.active_tab == NavTab::Booking,
        cars: state
            .catalog
            .cars()
            .iter()
            .map(|car| CarRow {
                slug: car.slug.clone(),
                name: car.name.clone(),
                category: car.category.clone(),
                daily_rate: money(car.daily_rate),
            })
            .collect(),
    };
    Ok(Html(template.render()?))
}

/// Homepage: the fleet front and center
async fn home(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>> {
    let chrome_state = page_chrome(&state, "/", &params);
    fleet_page(&state, &chrome_state)
}

/// Fleet listing page
async fn fleet(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>> {
    let chrome_state = page_chrome(&state, "/fleet", &params);
    fleet_page(&state, &chrome_state)
}

/// Booking calculator page.
///
/// The form submits back to itself with GET; each request rebuilds the
/// form state from the query, reprices, and renders the full breakdown.
/// Incomplete or inverted dates render as zeroed fields.
async fn book(
    State(state): State<AppState>,
    Path(car_slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>> {
    let car = state.catalog.car(&car_slug).ok_or(AppError::NotFound)?;
    let chrome_state = page_chrome(&state, "/book", &params);

    let selected: Vec<String> = state
        .catalog
        .add_ons()
        .iter()
        .filter(|a| params.contains_key(&format!("addon_{}", a.id)))
        .map(|a| a.id.clone())
        .collect();

    // Return first, pickup second: choosing a pickup drops a return that
    // is no longer strictly after it.
    let mut form = BookingForm {
        selected_add_ons: selected,
        ..BookingForm::empty()
    };
    if let Some(at) = params.get("return").and_then(|raw| parse_instant(raw)) {
        form = booking::apply(form, FormEvent::ReturnChosen(at));
    }
    if let Some(at) = params.get("pickup").and_then(|raw| parse_instant(raw)) {
        form = booking::apply(form, FormEvent::PickupChosen(at));
    }

    let request = form.quote_request(car.daily_rate, state.catalog.add_ons());
    let quote = price_quote(&request);
    let breakdown = quote.breakdown();

    let add_ons = state
        .catalog
        .add_ons()
        .iter()
        .map(|a| {
            let total = breakdown
                .and_then(|b| b.add_on_totals.iter().find(|t| t.id == a.id))
                .map(|t| t.total)
                .unwrap_or(Decimal::ZERO);
            AddOnRow {
                id: a.id.clone(),
                label: a.label.clone(),
                daily_rate: money(a.daily_rate),
                selected: form.is_selected(&a.id),
                total: money(total),
            }
        })
        .collect();

    let format_instant =
        |instant: Option<DateTime<Utc>>| match instant {
            Some(at) => at.format(DATETIME_LOCAL_FORMAT).to_string(),
            None => String::new(),
        };

    let template = BookingTemplate {
        body_class: chrome_state.theme.body_class(),
        menu_open: chrome_state.menu_open,
        active_home: chrome_state.active_tab == NavTab::Home,
        active_fleet: chrome_state.active_tab == NavTab::Fleet,
        active_booking: chrome_state.active_tab == NavTab::Booking,
        car_slug: car.slug.clone(),
        car_name: car.name.clone(),
        daily_rate: money(car.daily_rate),
        pickup_value: format_instant(form.pickup_at),
        return_value: format_instant(form.return_at),
        complete: breakdown.is_some(),
        days: breakdown.map(|b| b.days).unwrap_or(0).to_string(),
        base_total: money(breakdown.map(|b| b.base_total).unwrap_or(Decimal::ZERO)),
        add_ons,
        grand_total: money(breakdown.map(|b| b.grand_total).unwrap_or(Decimal::ZERO)),
    };
    Ok(Html(template.render()?))
}

/// Flip and persist the theme preference, then send the visitor back.
async fn toggle_theme(State(state): State<AppState>) -> Result<Redirect> {
    let theme = state.prefs.toggle()?;
    info!(theme = theme.as_str(), "theme preference updated");
    Ok(Redirect::to("/"))
}
