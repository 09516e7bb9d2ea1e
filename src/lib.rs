//! Founder Match - rule-based grant and investor matching for startup founders
//!
//! This library scores a catalog of grants or investors against a founder's
//! intake profile. Every item gets a display score, a strong-match flag and
//! the list of reasons behind the score, and the catalog comes back ranked
//! best-first. Scoring is deterministic and fully explainable.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{score_grants, score_investors, top_matches, Dashboard, MatchOutcome, Matcher};
pub use crate::models::{FounderProfile, Grant, Investor, Scored, ScoredGrant, ScoredInvestor};
