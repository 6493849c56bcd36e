use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripgate::cache::{MemoryCacheService, RedisCacheService, ResponseCache};
use tripgate::config::Config;
use tripgate::constants::DEFAULT_MEMORY_CACHE_MAX_ENTRIES;
use tripgate::services::attractions::AttractionsClient;
use tripgate::services::distance::{AuthMode, DistanceClient};
use tripgate::services::flights::FlightsClient;
use tripgate::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripgate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting tripgate API server");
    tracing::info!("Configuration loaded successfully");

    // Initialize cache: try Redis, fall back to in-memory
    let cache: Arc<dyn ResponseCache> = if let Some(ref redis_url) = config.redis_url {
        tracing::info!("Connecting to Redis cache...");
        match RedisCacheService::new(redis_url, config.response_cache_ttl).await {
            Ok(redis_cache) => {
                tracing::info!("Redis cache connection established");
                Arc::new(redis_cache)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to Redis: {}. Falling back to in-memory cache.",
                    e
                );
                Arc::new(MemoryCacheService::new(
                    config.response_cache_ttl,
                    DEFAULT_MEMORY_CACHE_MAX_ENTRIES,
                ))
            }
        }
    } else {
        tracing::info!("Redis URL not configured. Using in-memory cache.");
        Arc::new(MemoryCacheService::new(
            config.response_cache_ttl,
            DEFAULT_MEMORY_CACHE_MAX_ENTRIES,
        ))
    };

    // Initialize upstream clients from whatever credentials are present.
    // Absent credentials are normal: the endpoint serves fallback data.
    let distance_client = config.maps_api_key.clone().map(|api_key| {
        if let Some(ref base_url) = config.maps_base_url {
            DistanceClient::with_config(api_key, base_url.clone(), AuthMode::BearerHeader)
        } else {
            DistanceClient::new(api_key)
        }
    });
    if distance_client.is_none() {
        tracing::warn!("MAPS_API_KEY not set; distance endpoint will serve fallback estimates");
    }

    let flights_client = config.flight_credentials().map(|(key, secret)| {
        if let Some(ref base_url) = config.flights_base_url {
            FlightsClient::with_base_url(key.to_string(), secret.to_string(), base_url.clone())
        } else {
            FlightsClient::new(key.to_string(), secret.to_string())
        }
    });
    if flights_client.is_none() {
        tracing::warn!(
            "FLIGHTS_API_KEY/FLIGHTS_API_SECRET not both set; flights endpoint will serve mock offers"
        );
    }

    let attractions_client = config.attractions_api_key.clone().map(|api_key| {
        if let Some(ref base_url) = config.attractions_base_url {
            AttractionsClient::with_base_url(api_key, base_url.clone())
        } else {
            AttractionsClient::new(api_key)
        }
    });
    if attractions_client.is_none() {
        tracing::warn!(
            "ATTRACTIONS_API_KEY not set; attractions endpoint will serve the curated table"
        );
    }

    // Create application state
    let state = Arc::new(AppState {
        distance_client,
        flights_client,
        attractions_client,
        cache,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", tripgate::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
