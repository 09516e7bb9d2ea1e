use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::FounderProfile;

/// Request to score a catalog for a founder
///
/// An inline `profile` takes precedence over the stored profile for
/// `founderId`. With neither, the catalog comes back unscored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "founder_id", rename = "founderId", default)]
    pub founder_id: Option<String>,
    #[serde(default)]
    pub profile: Option<FounderProfile>,
    /// Truncate the ranked list to this many entries
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query parameters for the top-matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesQuery {
    #[validate(range(min = 1, max = 25))]
    #[serde(default)]
    pub n: Option<u8>,
}
