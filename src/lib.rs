// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod fallback;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use cache::ResponseCache;
use services::attractions::AttractionsClient;
use services::distance::DistanceClient;
use services::flights::FlightsClient;
use std::sync::Arc;

pub struct AppState {
    /// `None` when the corresponding credential is not configured; the
    /// endpoint then serves fallback data unconditionally.
    pub distance_client: Option<DistanceClient>,
    pub flights_client: Option<FlightsClient>,
    pub attractions_client: Option<AttractionsClient>,
    pub cache: Arc<dyn ResponseCache>,
}
