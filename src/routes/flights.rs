use crate::error::{AppError, Result};
use crate::models::flight::{FlightQuery, FlightSearchResponse};
use crate::{cache, fallback, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use time::macros::format_description;
use time::Date;

/// GET /flights?origin=..&destination=..&date=YYYY-MM-DD
///
/// Proxy to the flight-offer upstream, degrading to deterministic mock offers
/// whenever the upstream is unconfigured, unreachable, or the cities have no
/// known airport code to search with.
pub async fn flight_search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FlightQuery>,
) -> Result<Json<FlightSearchResponse>> {
    let origin = query.origin.trim();
    let destination = query.destination.trim();
    let date_input = query.date.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::InvalidRequest(
            "origin and destination are required".to_string(),
        ));
    }

    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(date_input, format)
        .map_err(|_| AppError::InvalidRequest("date must be YYYY-MM-DD".to_string()))?;

    tracing::info!(
        origin = origin,
        destination = destination,
        date = date_input,
        "Flight search request: {} -> {} on {}",
        origin,
        destination,
        date_input
    );

    let cache_key = cache::flights_cache_key(origin, destination, date_input);
    if let Some(value) = state.cache.get(&cache_key).await {
        if let Ok(cached) = serde_json::from_value::<FlightSearchResponse>(value) {
            return Ok(Json(cached));
        }
    }

    let response = resolve_flights(&state, origin, destination, date).await;

    if let Ok(value) = serde_json::to_value(&response) {
        state.cache.put(&cache_key, &value).await;
    }
    Ok(Json(response))
}

async fn resolve_flights(
    state: &AppState,
    origin: &str,
    destination: &str,
    date: Date,
) -> FlightSearchResponse {
    let airports = (
        fallback::flights::airport_for(origin),
        fallback::flights::airport_for(destination),
    );

    match (state.flights_client.as_ref(), airports) {
        (Some(client), (Some(from), Some(to))) => {
            match client.search_offers(from.iata, to.iata, date).await {
                Ok(data) => FlightSearchResponse {
                    data,
                    source: "live".to_string(),
                },
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Flight upstream failed, serving mock offers"
                    );
                    mock_response(origin, destination, date)
                }
            }
        }
        (Some(_), _) => {
            tracing::debug!(
                origin = origin,
                destination = destination,
                "No airport code for live search, serving mock offers"
            );
            mock_response(origin, destination, date)
        }
        (None, _) => {
            tracing::debug!("No flight upstream configured, serving mock offers");
            mock_response(origin, destination, date)
        }
    }
}

fn mock_response(origin: &str, destination: &str, date: Date) -> FlightSearchResponse {
    FlightSearchResponse {
        data: fallback::flights::generate_offers(origin, destination, date),
        source: "fallback".to_string(),
    }
}
