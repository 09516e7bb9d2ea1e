use serde::{Deserialize, Serialize};

/// Response for the grant/investor match endpoints
///
/// `personalized` is false when no profile was available; `items` are then
/// the catalog entries in catalog order without computed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse<T> {
    pub personalized: bool,
    pub items: Vec<T>,
    pub total_results: usize,
}

/// Highlights for the founder dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMatchesResponse<G, I> {
    pub personalized: bool,
    pub grants: Vec<G>,
    pub investors: Vec<I>,
    pub total_grants: usize,
    pub total_investors: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub grants: usize,
    pub investors: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Acknowledgement for a stored profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProfileResponse {
    pub success: bool,
    pub founder_id: String,
}
