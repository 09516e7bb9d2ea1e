use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use validator::Validate;
use crate::config::Settings;
use crate::core::{MatchOutcome, Matcher};
use crate::models::{
    ErrorResponse, FounderProfile, HealthResponse, MatchRequest, MatchResponse,
    StoreProfileResponse, TopMatchesQuery, TopMatchesResponse,
};
use crate::services::{Catalog, ProfileStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub profiles: ProfileStore,
    pub matcher: Matcher,
    pub settings: Arc<Settings>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles/{founder_id}", web::put().to(store_profile))
        .route("/profiles/{founder_id}", web::get().to(get_profile))
        .route("/grants/match", web::post().to(match_grants))
        .route("/investors/match", web::post().to(match_investors))
        .route("/matches/top/{founder_id}", web::get().to(top_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        grants: state.catalog.grants.len(),
        investors: state.catalog.investors.len(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn valid_founder_id(founder_id: &str) -> bool {
    !founder_id.trim().is_empty() && founder_id.len() <= 128
}

/// Store an intake profile
///
/// PUT /api/v1/profiles/{founder_id}
async fn store_profile(
    state: web::Data<AppState>,
    founder_id: web::Path<String>,
    profile: web::Json<FounderProfile>,
) -> impl Responder {
    let founder_id = founder_id.into_inner();
    if !valid_founder_id(&founder_id) {
        return bad_request("Validation failed", "founder id must be 1-128 characters".to_string());
    }

    state.profiles.put(&founder_id, profile.into_inner()).await;
    tracing::info!("Stored intake profile for founder: {}", founder_id);

    HttpResponse::Ok().json(StoreProfileResponse {
        success: true,
        founder_id,
    })
}

/// Fetch a stored intake profile
///
/// GET /api/v1/profiles/{founder_id}
async fn get_profile(
    state: web::Data<AppState>,
    founder_id: web::Path<String>,
) -> impl Responder {
    match state.profiles.get(&founder_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: e.to_string(),
            status_code: 404,
        }),
    }
}

/// Inline profile first, then the stored one. An unknown founder is not an
/// error; it only means the catalog goes out unscored.
async fn resolve_profile(state: &AppState, req: &MatchRequest) -> Option<FounderProfile> {
    if let Some(profile) = &req.profile {
        return Some(profile.clone());
    }

    let founder_id = req.founder_id.as_deref()?;
    match state.profiles.get(founder_id).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::info!("{}, serving unpersonalized catalog", e);
            None
        }
    }
}

fn match_response<T: Clone + Serialize>(mut outcome: MatchOutcome<T>, limit: Option<u16>) -> HttpResponse {
    let total_results = outcome.len();
    if let Some(limit) = limit {
        outcome.truncate(limit as usize);
    }

    match outcome {
        MatchOutcome::Personalized(items) => HttpResponse::Ok().json(MatchResponse {
            personalized: true,
            items,
            total_results,
        }),
        MatchOutcome::Unpersonalized(items) => HttpResponse::Ok().json(MatchResponse {
            personalized: false,
            items,
            total_results,
        }),
    }
}

/// Score the grant catalog
///
/// POST /api/v1/grants/match
///
/// Request body:
/// ```json
/// {
///   "founderId": "string",
///   "profile": { "startup_industry": "SaaS", "startup_stage": "MVP" },
///   "limit": 20
/// }
/// ```
async fn match_grants(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match_grants request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let profile = resolve_profile(&state, &req).await;
    let outcome = state.matcher.score_grants(profile.as_ref(), &state.catalog.grants);

    tracing::info!(
        "Scored {} grants (personalized: {}) for founder {:?}",
        outcome.len(),
        outcome.is_personalized(),
        req.founder_id
    );

    match_response(outcome, req.limit)
}

/// Score the investor catalog
///
/// POST /api/v1/investors/match
async fn match_investors(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match_investors request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let profile = resolve_profile(&state, &req).await;
    let outcome = state.matcher.score_investors(profile.as_ref(), &state.catalog.investors);

    tracing::info!(
        "Scored {} investors (personalized: {}) for founder {:?}",
        outcome.len(),
        outcome.is_personalized(),
        req.founder_id
    );

    match_response(outcome, req.limit)
}

/// Dashboard highlights for a stored founder
///
/// GET /api/v1/matches/top/{founder_id}?n=3
async fn top_matches(
    state: web::Data<AppState>,
    founder_id: web::Path<String>,
    query: web::Query<TopMatchesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let n = state.settings.top_n(query.n);
    let profile = match state.profiles.get(&founder_id).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::info!("{}, no highlights available", e);
            None
        }
    };

    let dashboard = state.matcher.dashboard(
        profile.as_ref(),
        &state.catalog.grants,
        &state.catalog.investors,
        n,
    );

    tracing::debug!(
        "Top matches for {}: {} grants, {} investors",
        founder_id,
        dashboard.grants.len(),
        dashboard.investors.len()
    );

    HttpResponse::Ok().json(TopMatchesResponse {
        personalized: dashboard.personalized,
        grants: dashboard.grants,
        investors: dashboard.investors,
        total_grants: dashboard.total_grants,
        total_investors: dashboard.total_investors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
            grants: 20,
            investors: 8,
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_founder_id_validation() {
        assert!(valid_founder_id("founder-1"));
        assert!(!valid_founder_id("  "));
        assert!(!valid_founder_id(&"x".repeat(129)));
    }
}
