use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let cache_healthy = state.cache.health_check().await;

    let status = json!({
        "status": if cache_healthy { "ok" } else { "degraded" },
        "checks": {
            "cache": {
                "backend": state.cache.backend_name(),
                "healthy": cache_healthy,
            },
            // Configured-ness only; the fallback path keeps every endpoint
            // serving even with all upstreams absent.
            "upstreams": {
                "distance": state.distance_client.is_some(),
                "flights": state.flights_client.is_some(),
                "attractions": state.attractions_client.is_some(),
            }
        }
    });

    Json(status)
}
