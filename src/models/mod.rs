// Model exports
pub mod domain;
pub mod profile;
pub mod requests;
pub mod responses;

pub use domain::{Grant, GrantStatus, Investor, Scored, ScoredGrant, ScoredInvestor};
pub use profile::{BusinessModel, FounderProfile, FundingRange, Stage};
pub use requests::{MatchRequest, TopMatchesQuery};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, StoreProfileResponse, TopMatchesResponse};
