//! Wire types for the distance-matrix payload.
//!
//! The shape mirrors the upstream mapping API exactly, so consumers cannot
//! tell (and do not need to know) whether a response came from the live
//! upstream or from the in-process fallback estimator. `origin_name`,
//! `destination_name` and `formatted` are gateway additions; live upstream
//! responses get them filled in by [`DistanceMatrixResponse::ensure_formatted`]
//! before leaving the handler.

use serde::{Deserialize, Serialize};

pub const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub origin: String,
    pub destination: String,
}

/// A `{value, text}` pair as the upstream renders distances and durations:
/// machine units plus a display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValueText {
    pub text: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixElement {
    pub distance: ValueText,
    pub duration: ValueText,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixRow {
    pub elements: Vec<MatrixElement>,
}

/// Pre-formatted display strings for the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedEstimate {
    pub distance: String,
    pub duration: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrixResponse {
    pub destination_addresses: Vec<String>,
    pub origin_addresses: Vec<String>,
    pub rows: Vec<MatrixRow>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<FormattedEstimate>,
}

impl DistanceMatrixResponse {
    /// The single element callers care about. The clients and the fallback
    /// estimator both guarantee `rows[0].elements[0]` exists on an OK payload.
    pub fn primary_element(&self) -> Option<&MatrixElement> {
        self.rows.first().and_then(|row| row.elements.first())
    }

    /// Fill in the gateway-only fields from the primary element so callers can
    /// read `formatted` regardless of which path produced the payload.
    pub fn ensure_formatted(&mut self, origin: &str, destination: &str) {
        if self.origin_name.is_none() {
            self.origin_name = Some(origin.to_string());
        }
        if self.destination_name.is_none() {
            self.destination_name = Some(destination.to_string());
        }
        if self.formatted.is_none() {
            if let Some(element) = self.primary_element() {
                self.formatted = Some(FormattedEstimate {
                    distance: element.distance.text.clone(),
                    duration: element.duration.text.clone(),
                    status: element.status.clone(),
                });
            }
        }
    }
}
