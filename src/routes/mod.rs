pub mod attractions;
pub mod distance;
pub mod flights;
pub mod health;
pub mod trip;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/distance", get(distance::distance_matrix))
        .route("/flights", get(flights::flight_search))
        .route("/attractions", get(attractions::attraction_search))
        .route("/trip/legs", post(trip::trip_legs))
        .route("/health", get(health::health_check))
        .with_state(state)
}
