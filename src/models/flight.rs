use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single bookable flight, shared between the live upstream mapping and the
/// mock generator so the UI renders both identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: Uuid,
    /// IATA code of the departure airport.
    pub origin: String,
    /// IATA code of the arrival airport.
    pub destination: String,
    pub carrier: String,
    pub flight_number: String,
    /// Local departure time, ISO 8601 without offset (e.g. `2026-08-08T08:00:00`).
    pub departure_at: String,
    pub arrival_at: String,
    pub duration_minutes: u64,
    pub price: u64,
    pub currency: String,
    pub seats_available: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchResponse {
    pub data: Vec<FlightOffer>,
    /// `"live"` when the upstream produced the offers, `"fallback"` for mocks.
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    /// Departure date, `YYYY-MM-DD`.
    pub date: String,
}
