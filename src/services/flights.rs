use crate::error::{AppError, Result};
use crate::models::FlightOffer;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use time::{Date, Duration, OffsetDateTime};
use tokio::sync::Mutex;
use uuid::Uuid;

const FLIGHTS_BASE_URL: &str = "https://test.api.amadeus.com";

/// Refresh the OAuth token this long before its reported expiry.
const TOKEN_EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Client for the flight-offer search upstream. Authentication is OAuth2
/// client-credentials: a short-lived bearer token fetched on demand and
/// cached in-process until near expiry.
#[derive(Clone)]
pub struct FlightsClient {
    client: Client,
    api_key: String,
    api_secret: String,
    base_url: String,
    token: Arc<Mutex<Option<CachedToken>>>,
}

struct CachedToken {
    access_token: String,
    expires_at: OffsetDateTime,
}

impl FlightsClient {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::with_base_url(api_key, api_secret, FLIGHTS_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, api_secret: String, base_url: String) -> Self {
        FlightsClient {
            client: Client::new(),
            api_key,
            api_secret,
            base_url,
            token: Arc::new(Mutex::new(None)),
        }
    }

    async fn bearer_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > OffsetDateTime::now_utc() {
                return Ok(token.access_token.clone());
            }
        }

        tracing::debug!("Fetching new flight upstream OAuth token");
        let response = self
            .client
            .post(format!("{}/v1/security/oauth2/token", self.base_url))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.api_key.as_str()),
                ("client_secret", self.api_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::UpstreamApi(format!(
                "Token request HTTP {}",
                status
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("Failed to parse token: {}", e)))?;

        let expires_at = OffsetDateTime::now_utc()
            + Duration::seconds(token.expires_in as i64 - TOKEN_EXPIRY_MARGIN_SECONDS);
        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at,
        });

        Ok(access_token)
    }

    /// Search one-way offers between two airports (IATA codes) on a date.
    pub async fn search_offers(
        &self,
        origin_code: &str,
        destination_code: &str,
        date: Date,
    ) -> Result<Vec<FlightOffer>> {
        let token = self.bearer_token().await?;
        let departure_date = format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        );

        tracing::debug!(
            origin = origin_code,
            destination = destination_code,
            date = %departure_date,
            "Flight offer search: {} -> {} on {}",
            origin_code, destination_code, departure_date
        );

        let response = self
            .client
            .get(format!("{}/v2/shopping/flight-offers", self.base_url))
            .bearer_auth(token)
            .query(&[
                ("originLocationCode", origin_code),
                ("destinationLocationCode", destination_code),
                ("departureDate", departure_date.as_str()),
                ("adults", "1"),
                ("max", "5"),
            ])
            .send()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "Flight search HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::UpstreamApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let offers: OffersApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("Failed to parse response: {}", e)))?;

        if offers.data.is_empty() {
            tracing::warn!(
                origin = origin_code,
                destination = destination_code,
                "Flight search returned 0 offers"
            );
            return Err(AppError::UpstreamApi("No offers found".to_string()));
        }

        let mapped: Vec<FlightOffer> = offers
            .data
            .iter()
            .filter_map(map_offer)
            .collect();

        if mapped.is_empty() {
            return Err(AppError::UpstreamApi(
                "No offers with usable itineraries".to_string(),
            ));
        }

        tracing::debug!(count = mapped.len(), "Flight search mapped {} offers", mapped.len());
        Ok(mapped)
    }
}

fn map_offer(offer: &ApiOffer) -> Option<FlightOffer> {
    let itinerary = offer.itineraries.first()?;
    let first_segment = itinerary.segments.first()?;
    let last_segment = itinerary.segments.last()?;
    let duration_minutes = parse_iso_duration(&itinerary.duration)?;
    let price = offer.price.total.parse::<f64>().ok()?.round() as u64;

    Some(FlightOffer {
        id: Uuid::new_v4(),
        origin: first_segment.departure.iata_code.clone(),
        destination: last_segment.arrival.iata_code.clone(),
        carrier: first_segment.carrier_code.clone(),
        flight_number: format!("{}{}", first_segment.carrier_code, first_segment.number),
        departure_at: first_segment.departure.at.clone(),
        arrival_at: last_segment.arrival.at.clone(),
        duration_minutes,
        price,
        currency: offer.price.currency.clone(),
        seats_available: offer.number_of_bookable_seats.unwrap_or(1),
    })
}

/// Parse an ISO 8601 time duration such as `PT2H30M` into minutes. Seconds
/// components are ignored; anything malformed is `None`.
fn parse_iso_duration(duration: &str) -> Option<u64> {
    let rest = duration.strip_prefix("PT")?;
    let mut minutes = 0u64;
    let mut digits = String::new();

    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            let value: u64 = digits.parse().ok()?;
            digits.clear();
            match c {
                'H' => minutes += value * 60,
                'M' => minutes += value,
                'S' => {}
                _ => return None,
            }
        }
    }

    if !digits.is_empty() {
        return None;
    }
    Some(minutes)
}

// Upstream API response types

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct OffersApiResponse {
    data: Vec<ApiOffer>,
}

#[derive(Debug, Deserialize)]
struct ApiOffer {
    itineraries: Vec<ApiItinerary>,
    price: ApiPrice,
    #[serde(rename = "numberOfBookableSeats", default)]
    number_of_bookable_seats: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiItinerary {
    duration: String,
    segments: Vec<ApiSegment>,
}

#[derive(Debug, Deserialize)]
struct ApiSegment {
    departure: ApiEndpoint,
    arrival: ApiEndpoint,
    #[serde(rename = "carrierCode")]
    carrier_code: String,
    number: String,
}

#[derive(Debug, Deserialize)]
struct ApiEndpoint {
    #[serde(rename = "iataCode")]
    iata_code: String,
    at: String,
}

#[derive(Debug, Deserialize)]
struct ApiPrice {
    total: String,
    currency: String,
}
