use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use tripgate::cache::{MemoryCacheService, ResponseCache};
use tripgate::AppState;

/// Router with no upstream credentials: every endpoint serves its fallback
/// path. No network, no Redis.
fn setup_test_app() -> axum::Router {
    let cache: Arc<dyn ResponseCache> = Arc::new(MemoryCacheService::new(600, 100));

    let state = Arc::new(AppState {
        distance_client: None,
        flights_client: None,
        attractions_client: None,
        cache,
    });

    tripgate::routes::create_router(state)
}

async fn get_json(
    app: axum::Router,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(setup_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["cache"]["backend"], "memory");
    assert_eq!(json["checks"]["cache"]["healthy"], true);
    assert_eq!(json["checks"]["upstreams"]["distance"], false);
    assert_eq!(json["checks"]["upstreams"]["flights"], false);
}

#[tokio::test]
async fn test_distance_known_pair_serves_curated_estimate() {
    let (status, json) = get_json(
        setup_test_app(),
        "/distance?origin=tokyo&destination=osaka",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    assert_eq!(json["origin_addresses"][0], "tokyo");
    assert_eq!(json["destination_addresses"][0], "osaka");

    let element = &json["rows"][0]["elements"][0];
    assert_eq!(element["distance"]["value"], 503_000);
    assert_eq!(element["duration"]["value"], 9_000);
    assert_eq!(element["status"], "OK");

    assert_eq!(json["formatted"]["distance"], "503.0 km");
    assert_eq!(json["formatted"]["duration"], "2時間30分");
}

#[tokio::test]
async fn test_distance_japanese_input() {
    // origin=大阪 destination=京都, percent-encoded
    let (status, json) = get_json(
        setup_test_app(),
        "/distance?origin=%E5%A4%A7%E9%98%AA&destination=%E4%BA%AC%E9%83%BD",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["formatted"]["distance"], "56.0 km");
    assert_eq!(json["rows"][0]["elements"][0]["distance"]["value"], 56_000);
}

#[tokio::test]
async fn test_distance_unknown_places_still_succeed() {
    let (status, json) = get_json(
        setup_test_app(),
        "/distance?origin=Unknown%20Place&destination=Another%20Unknown",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    let element = &json["rows"][0]["elements"][0];
    assert!(element["distance"]["value"].as_u64().unwrap() > 0);
    assert!(element["duration"]["value"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_distance_empty_origin_is_rejected() {
    let request = Request::builder()
        .uri("/distance?origin=%20&destination=osaka")
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_distance_missing_param_is_rejected() {
    let request = Request::builder()
        .uri("/distance?origin=tokyo")
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_distance_repeat_queries_are_stable() {
    let app = setup_test_app();

    let (_, first) = get_json(app.clone(), "/distance?origin=tokyo&destination=osaka").await;
    let (_, second) = get_json(app, "/distance?origin=tokyo&destination=osaka").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_flights_fallback_offers() {
    let (status, json) = get_json(
        setup_test_app(),
        "/flights?origin=tokyo&destination=sapporo&date=2026-09-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "fallback");

    let offers = json["data"].as_array().unwrap();
    assert!((2..=4).contains(&offers.len()));
    assert_eq!(offers[0]["origin"], "HND");
    assert_eq!(offers[0]["destination"], "CTS");
    assert_eq!(offers[0]["currency"], "JPY");
    assert!(offers[0]["departure_at"]
        .as_str()
        .unwrap()
        .starts_with("2026-09-01T"));
}

#[tokio::test]
async fn test_flights_invalid_date_is_rejected() {
    let request = Request::builder()
        .uri("/flights?origin=tokyo&destination=sapporo&date=September%201st")
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_attractions_fallback_table() {
    let (status, json) = get_json(setup_test_app(), "/attractions?location=kyoto").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "fallback");
    assert_eq!(json["location"], "kyoto");

    let attractions = json["attractions"].as_array().unwrap();
    assert!(!attractions.is_empty());
    assert!(attractions[0]["rating"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_attractions_unknown_location_echoes_name() {
    let (status, json) = get_json(setup_test_app(), "/attractions?location=Paris").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["location"], "Paris");
    assert!(!json["attractions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_trip_legs_aggregation() {
    let body = json!({"stops": ["tokyo", "kyoto", "osaka"]});
    let request = Request::builder()
        .method("POST")
        .uri("/trip/legs")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = setup_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let legs = json["legs"].as_array().unwrap();
    assert_eq!(legs.len(), 2);
    assert_eq!(legs[0]["origin"], "tokyo");
    assert_eq!(legs[0]["destination"], "kyoto");
    assert_eq!(legs[0]["distance"]["value"], 476_000);
    assert_eq!(legs[1]["distance"]["value"], 56_000);

    // 476000 + 56000 m, 8100 + 1800 s
    assert_eq!(json["total"]["distance_m"], 532_000);
    assert_eq!(json["total"]["duration_s"], 9_900);
    assert_eq!(json["total"]["distance_text"], "532.0 km");
    assert_eq!(json["total"]["duration_text"], "2時間45分");
}

#[tokio::test]
async fn test_trip_legs_rejects_single_stop() {
    let body = json!({"stops": ["tokyo"]});
    let request = Request::builder()
        .method("POST")
        .uri("/trip/legs")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = setup_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
