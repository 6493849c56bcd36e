use crate::error::{AppError, Result};
use crate::models::Attraction;
use reqwest::Client;
use serde::Deserialize;

const ATTRACTIONS_BASE_URL: &str = "https://api.content.tripadvisor.com/api/v1";

/// Client for the attractions-content upstream. Authenticates with a `key`
/// query parameter.
#[derive(Clone)]
pub struct AttractionsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AttractionsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, ATTRACTIONS_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        AttractionsClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Search attractions around a free-text location.
    pub async fn search(&self, location: &str) -> Result<Vec<Attraction>> {
        if location.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "location is required".to_string(),
            ));
        }

        tracing::debug!(location = location, "Attraction search: {}", location);

        let response = self
            .client
            .get(format!("{}/location/search", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("searchQuery", location),
                ("category", "attractions"),
                ("language", "ja"),
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
                "Attraction search HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::UpstreamApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let results: LocationSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("Failed to parse response: {}", e)))?;

        if results.data.is_empty() {
            tracing::warn!(location = location, "Attraction search returned 0 results");
            return Err(AppError::UpstreamApi("No attractions found".to_string()));
        }

        let attractions = results
            .data
            .into_iter()
            .map(|entry| Attraction {
                name: entry.name,
                category: "attraction".to_string(),
                rating: None,
                review_count: None,
                description: entry.address_obj.and_then(|a| a.address_string),
            })
            .collect();

        Ok(attractions)
    }
}

// Upstream API response types

#[derive(Debug, Deserialize)]
struct LocationSearchResponse {
    data: Vec<ApiLocation>,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    #[serde(default)]
    address_obj: Option<ApiAddress>,
}

#[derive(Debug, Deserialize)]
struct ApiAddress {
    #[serde(default)]
    address_string: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_base_url() {
        let client = AttractionsClient::new("key".to_string());
        assert_eq!(client.base_url, ATTRACTIONS_BASE_URL);
    }

    #[tokio::test]
    async fn test_empty_location_is_rejected_before_any_request() {
        let client = AttractionsClient::new("key".to_string());
        let result = client.search("  ").await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[test]
    fn test_location_payload_parsing() {
        let payload = r#"{"data": [{"name": "Senso-ji", "address_obj": {"address_string": "2 Chome-3-1 Asakusa, Taito City"}}]}"#;
        let parsed: LocationSearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].name, "Senso-ji");
    }
}
