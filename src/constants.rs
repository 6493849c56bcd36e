//! Stable application-wide constants.
//!
//! Values here are structural invariants, estimation coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Cache defaults (used when env vars are absent) ---

/// Default proxy-response cache TTL: 10 minutes. Overridden by `RESPONSE_CACHE_TTL`.
pub const DEFAULT_RESPONSE_CACHE_TTL_SECONDS: u64 = 600;
/// Maximum entries for the in-memory response cache (LRU eviction).
pub const DEFAULT_MEMORY_CACHE_MAX_ENTRIES: u64 = 1_000;

// --- Fallback distance estimation ---
// Coefficients of the last-resort geometric estimate. The planar
// one-degree-is-111km approximation is intentional: this tier only produces
// placeholder figures once curated route data has already missed.

/// Meters per degree of latitude/longitude in the planar approximation.
pub const DEGREE_METERS: f64 = 111_000.0;
/// Flat travel speed (m/s) used to derive a duration from an estimated
/// distance. 55.5 m/s is 200 km/h, representative of long-distance rail.
pub const FALLBACK_SPEED_MPS: f64 = 55.5;

// --- Mock flight offer generation ---

/// Assumed cruise speed (km/h) for deriving mock flight durations.
pub const MOCK_CRUISE_SPEED_KMH: f64 = 750.0;
/// Fixed taxi/climb/descent overhead (minutes) added to every mock flight.
pub const MOCK_FLIGHT_OVERHEAD_MINUTES: u64 = 40;
/// Base fare (JPY) before the per-kilometer component.
pub const MOCK_PRICE_BASE_JPY: f64 = 5_000.0;
/// Per-kilometer fare component (JPY/km).
pub const MOCK_PRICE_PER_KM_JPY: f64 = 13.0;
