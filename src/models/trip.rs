use crate::models::matrix::ValueText;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TripLegsRequest {
    /// Ordered stop names; consecutive pairs become legs.
    pub stops: Vec<String>,
}

impl TripLegsRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.stops.len() < 2 {
            return Err("at least 2 stops are required".to_string());
        }
        if self.stops.iter().any(|stop| stop.trim().is_empty()) {
            return Err("stop names must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripLeg {
    pub origin: String,
    pub destination: String,
    pub distance: ValueText,
    pub duration: ValueText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripTotals {
    pub distance_m: u64,
    pub duration_s: u64,
    pub distance_text: String,
    pub duration_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripLegsResponse {
    pub legs: Vec<TripLeg>,
    pub total: TripTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_legs_request_validation() {
        let mut req = TripLegsRequest {
            stops: vec!["tokyo".to_string(), "osaka".to_string()],
        };
        assert!(req.validate().is_ok());

        req.stops = vec!["tokyo".to_string()];
        assert!(req.validate().is_err());

        req.stops = vec!["tokyo".to_string(), "   ".to_string()];
        assert!(req.validate().is_err());
    }
}
