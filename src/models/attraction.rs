use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttractionSearchResponse {
    /// The display name of the resolved location.
    pub location: String,
    pub attractions: Vec<Attraction>,
    /// `"live"` when the upstream produced the list, `"fallback"` for the
    /// curated table.
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct AttractionQuery {
    pub location: String,
}
