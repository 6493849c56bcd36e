use crate::error::{AppError, Result};
use crate::fallback::distance::{format_distance, format_duration};
use crate::models::trip::{TripLeg, TripLegsRequest, TripLegsResponse, TripTotals};
use crate::routes::distance::cached_distance;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /trip/legs
///
/// Resolve every consecutive stop pair of an itinerary through the same
/// cache/upstream/fallback ladder as the distance endpoint, concurrently,
/// and aggregate totals for the whole trip.
pub async fn trip_legs(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripLegsRequest>,
) -> Result<Json<TripLegsResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    let pairs: Vec<(String, String)> = request
        .stops
        .windows(2)
        .map(|pair| (pair[0].trim().to_string(), pair[1].trim().to_string()))
        .collect();

    tracing::info!(
        stops = request.stops.len(),
        legs = pairs.len(),
        "Trip legs request: {} stops, {} legs",
        request.stops.len(),
        pairs.len()
    );

    let resolutions = futures::future::join_all(
        pairs
            .iter()
            .map(|(from, to)| cached_distance(&state, from, to)),
    )
    .await;

    let mut legs = Vec::with_capacity(pairs.len());
    let mut total_distance_m = 0u64;
    let mut total_duration_s = 0u64;

    for ((from, to), response) in pairs.iter().zip(resolutions) {
        let element = response
            .primary_element()
            .ok_or_else(|| AppError::Internal("matrix payload missing element".to_string()))?;

        total_distance_m += element.distance.value;
        total_duration_s += element.duration.value;
        legs.push(TripLeg {
            origin: from.clone(),
            destination: to.clone(),
            distance: element.distance.clone(),
            duration: element.duration.clone(),
        });
    }

    let total = TripTotals {
        distance_m: total_distance_m,
        duration_s: total_duration_s,
        distance_text: format_distance(total_distance_m),
        duration_text: format_duration(total_duration_s),
    };

    Ok(Json(TripLegsResponse { legs, total }))
}
