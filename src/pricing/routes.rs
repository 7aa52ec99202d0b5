//! Pricing and booking API routes.
//!
//! JSON surface the booking page scripts call into: quote a rental,
//! submit a booking, read the rate table.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, warn};

use crate::AppState;

use super::calculators::price_quote;
use super::models::Quote;
use super::requests::{BookingApiRequest, QuoteApiRequest};
use super::responses::{BookingErrorResponse, BookingResponse, CatalogResponse, QuoteResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quote", post(quote))
        .route("/api/bookings", post(submit_booking))
        .route("/api/catalog", get(catalog))
}

/// Price a quote request. Incomplete input is a normal response, never
/// an error status.
async fn quote(Json(api_request): Json<QuoteApiRequest>) -> Json<QuoteResponse> {
    let request = api_request.into_quote_request();
    let response = match price_quote(&request) {
        Quote::Priced(breakdown) => QuoteResponse::from_breakdown(&breakdown),
        Quote::Incomplete => {
            QuoteResponse::incomplete(request.add_ons.iter().map(|a| a.id.clone()))
        }
    };
    Json(response)
}

/// Submit a booking. On success the intent payload is handed off to the
/// downstream reservation flow and the caller gets a reference plus a
/// redirect target.
async fn submit_booking(
    State(state): State<AppState>,
    Json(submission): Json<BookingApiRequest>,
) -> Response {
    match services::build_booking_intent(&state.catalog, &submission) {
        Ok(intent) => {
            info!(
                reference = %intent.reference,
                car = %intent.car,
                days = intent.quote.days,
                grand_total = %intent.quote.grand_total,
                "booking intent handed off"
            );
            if let Ok(payload) = serde_json::to_string(&intent) {
                debug!(%payload, "booking intent payload");
            }
            let body = BookingResponse {
                reference: intent.reference,
                redirect: "/fleet".to_string(),
                quote: QuoteResponse::from_breakdown(&intent.quote),
            };
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(err) => {
            warn!(error = %err, "booking submission rejected");
            let body = BookingErrorResponse {
                error_type: err.error_type().to_string(),
                message: err.to_string(),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
    }
}

/// The fleet and add-on rate table.
async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        cars: state.catalog.cars().to_vec(),
        add_ons: state.catalog.add_ons().to_vec(),
    })
}
