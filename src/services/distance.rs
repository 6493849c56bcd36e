use crate::error::{AppError, Result};
use crate::models::matrix::{DistanceMatrixResponse, STATUS_OK};
use reqwest::Client;

const DISTANCE_MATRIX_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// How the client authenticates with the distance-matrix API.
#[derive(Clone, Debug)]
pub enum AuthMode {
    /// Current default: send `key` query param (direct upstream).
    QueryKey,
    /// Proxy mode: send `Authorization: Bearer` header.
    BearerHeader,
}

#[derive(Clone)]
pub struct DistanceClient {
    client: Client,
    api_key: String,
    base_url: String,
    auth_mode: AuthMode,
}

impl DistanceClient {
    pub fn new(api_key: String) -> Self {
        DistanceClient {
            client: Client::new(),
            api_key,
            base_url: DISTANCE_MATRIX_BASE_URL.to_string(),
            auth_mode: AuthMode::QueryKey,
        }
    }

    pub fn with_config(api_key: String, base_url: String, auth_mode: AuthMode) -> Self {
        DistanceClient {
            client: Client::new(),
            api_key,
            base_url,
            auth_mode,
        }
    }

    /// Query the upstream for a single origin/destination pair.
    ///
    /// Any transport failure, non-2xx status, unparseable body, or non-OK
    /// payload is an `UpstreamApi` error; callers treat all of those as the
    /// signal to serve the fallback estimate instead.
    pub async fn distance_matrix(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceMatrixResponse> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "origin and destination are required".to_string(),
            ));
        }

        tracing::debug!(
            origin = origin,
            destination = destination,
            "Distance matrix request: {} -> {}",
            origin,
            destination
        );

        let mut request = self.client.get(&self.base_url).query(&[
            ("origins", origin),
            ("destinations", destination),
            ("language", "ja"),
        ]);

        match self.auth_mode {
            AuthMode::QueryKey => {
                request = request.query(&[("key", &self.api_key)]);
            }
            AuthMode::BearerHeader => {
                request = request.bearer_auth(&self.api_key);
            }
        }

        let response = request
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
                "Distance matrix HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::UpstreamApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let matrix: DistanceMatrixResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("Failed to parse response: {}", e)))?;

        if matrix.status != STATUS_OK {
            tracing::warn!(
                upstream_status = %matrix.status,
                "Distance matrix returned non-OK status {}",
                matrix.status
            );
            return Err(AppError::UpstreamApi(format!(
                "Upstream status {}",
                matrix.status
            )));
        }

        match matrix.primary_element() {
            Some(element) if element.status == STATUS_OK => {
                tracing::debug!(
                    distance_m = element.distance.value,
                    duration_s = element.duration.value,
                    "Distance matrix response: {}m, {}s",
                    element.distance.value,
                    element.duration.value
                );
                Ok(matrix)
            }
            Some(element) => Err(AppError::UpstreamApi(format!(
                "Element status {}",
                element.status
            ))),
            None => Err(AppError::UpstreamApi("Empty matrix rows".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_query_key() {
        let client = DistanceClient::new("test-key".to_string());
        assert_eq!(client.base_url, DISTANCE_MATRIX_BASE_URL);
        assert!(matches!(client.auth_mode, AuthMode::QueryKey));
    }

    #[test]
    fn test_with_config_bearer_mode() {
        let client = DistanceClient::with_config(
            "my-key".to_string(),
            "http://localhost:4000/v1/distance".to_string(),
            AuthMode::BearerHeader,
        );
        assert_eq!(client.base_url, "http://localhost:4000/v1/distance");
        assert!(matches!(client.auth_mode, AuthMode::BearerHeader));
    }

    #[tokio::test]
    async fn test_empty_inputs_are_rejected_before_any_request() {
        let client = DistanceClient::new("test-key".to_string());
        let result = client.distance_matrix("", "osaka").await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));

        let result = client.distance_matrix("tokyo", "   ").await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}
