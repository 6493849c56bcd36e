use crate::error::{AppError, Result};
use crate::models::attraction::{AttractionQuery, AttractionSearchResponse};
use crate::{cache, fallback, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

/// GET /attractions?location=..
///
/// Proxy to the attractions upstream, degrading to the curated per-city table.
pub async fn attraction_search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AttractionQuery>,
) -> Result<Json<AttractionSearchResponse>> {
    let location = query.location.trim();
    if location.is_empty() {
        return Err(AppError::InvalidRequest("location is required".to_string()));
    }

    tracing::info!(location = location, "Attraction request: {}", location);

    let cache_key = cache::attractions_cache_key(location);
    if let Some(value) = state.cache.get(&cache_key).await {
        if let Ok(cached) = serde_json::from_value::<AttractionSearchResponse>(value) {
            return Ok(Json(cached));
        }
    }

    let response = match state.attractions_client.as_ref() {
        Some(client) => match client.search(location).await {
            Ok(attractions) => AttractionSearchResponse {
                location: location.to_string(),
                attractions,
                source: "live".to_string(),
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Attractions upstream failed, serving curated list"
                );
                curated_response(location)
            }
        },
        None => {
            tracing::debug!("No attractions upstream configured, serving curated list");
            curated_response(location)
        }
    };

    if let Ok(value) = serde_json::to_value(&response) {
        state.cache.put(&cache_key, &value).await;
    }
    Ok(Json(response))
}

fn curated_response(location: &str) -> AttractionSearchResponse {
    let (display, attractions) = fallback::attractions::attractions_for(location);
    AttractionSearchResponse {
        location: display,
        attractions,
        source: "fallback".to_string(),
    }
}
