use crate::error::{AppError, Result};
use crate::models::matrix::{DistanceMatrixResponse, DistanceQuery};
use crate::{cache, fallback, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

/// GET /distance?origin=..&destination=..
///
/// Proxy to the distance-matrix upstream. Any upstream failure (missing
/// credential, transport error, bad payload) degrades to the in-process
/// estimator, so this endpoint only ever rejects malformed requests.
pub async fn distance_matrix(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DistanceQuery>,
) -> Result<Json<DistanceMatrixResponse>> {
    let origin = query.origin.trim();
    let destination = query.destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::InvalidRequest(
            "origin and destination are required".to_string(),
        ));
    }

    tracing::info!(
        origin = origin,
        destination = destination,
        "Distance request: {} -> {}",
        origin,
        destination
    );

    Ok(Json(cached_distance(&state, origin, destination).await))
}

/// Cache-then-upstream-then-fallback ladder for one origin/destination pair.
/// Shared with the trip-leg handler. Infallible past input validation.
pub(crate) async fn cached_distance(
    state: &AppState,
    origin: &str,
    destination: &str,
) -> DistanceMatrixResponse {
    let cache_key = cache::distance_cache_key(origin, destination);
    if let Some(value) = state.cache.get(&cache_key).await {
        if let Ok(cached) = serde_json::from_value::<DistanceMatrixResponse>(value) {
            return cached;
        }
    }

    let response = resolve_distance(state, origin, destination).await;

    if let Ok(value) = serde_json::to_value(&response) {
        state.cache.put(&cache_key, &value).await;
    }
    response
}

async fn resolve_distance(
    state: &AppState,
    origin: &str,
    destination: &str,
) -> DistanceMatrixResponse {
    match state.distance_client.as_ref() {
        Some(client) => match client.distance_matrix(origin, destination).await {
            Ok(mut live) => {
                live.ensure_formatted(origin, destination);
                live
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Distance upstream failed, serving fallback estimate"
                );
                fallback::distance::estimate(origin, destination)
            }
        },
        None => {
            tracing::debug!("No distance upstream configured, serving fallback estimate");
            fallback::distance::estimate(origin, destination)
        }
    }
}
