// Integration tests for Founder Match

use actix_web::{test as actix_test, web, App};
use founder_match::config::Settings;
use founder_match::core::{MatchOutcome, Matcher};
use founder_match::models::FounderProfile;
use founder_match::routes::{self, matches::AppState};
use founder_match::services::{Catalog, ProfileStore};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state() -> AppState {
    AppState {
        catalog: Arc::new(Catalog::bundled().expect("bundled catalog")),
        profiles: ProfileStore::new(100, 60),
        matcher: Matcher::new(),
        settings: Arc::new(Settings::default()),
    }
}

fn saas_founder() -> Value {
    json!({
        "startup_industry": "SaaS",
        "startup_stage": "MVP",
        "startup_business_model": "B2B",
        "founder_location": "Detroit, MI",
        "funding_plans": "Seeking grants",
        "funding_amount_range": "$250K-1M",
        "primary_goals": ["Raise funding", "Join accelerator"],
        "team_size": "2-3 people"
    })
}

#[test]
fn test_integration_bundled_catalog_ranking() {
    let catalog = Catalog::bundled().unwrap();
    let profile: FounderProfile = serde_json::from_value(saas_founder()).unwrap();

    let outcome = Matcher::new().score_grants(Some(&profile), &catalog.grants);
    let scored = match outcome {
        MatchOutcome::Personalized(items) => items,
        MatchOutcome::Unpersonalized(_) => panic!("profile was supplied"),
    };

    assert_eq!(scored.len(), catalog.grants.len());
    for pair in scored.windows(2) {
        assert!(pair[0].match_level >= pair[1].match_level, "grants not sorted");
    }
    for s in &scored {
        assert!(s.match_level <= 92);
    }

    // the early-stage accelerator program is a strong fit for this founder
    let baf = scored.iter().find(|s| s.item.id == "id-007").unwrap();
    assert!(baf.ai_matched);
    assert!(baf.match_reasons.iter().any(|r| r == "Early-stage match"));
}

#[test]
fn test_integration_investor_ranking() {
    let catalog = Catalog::bundled().unwrap();
    let profile: FounderProfile = serde_json::from_value(saas_founder()).unwrap();

    let outcome = Matcher::new().score_investors(Some(&profile), &catalog.investors);
    let top = outcome.top_matches(3);

    assert!(top.len() <= 3);
    assert_eq!(top[0].item.id, "inv-001");
    assert_eq!(
        top[0].match_reasons,
        vec![
            "SaaS sector match",
            "MVP stage match",
            "Check size match",
            "B2B model fit",
            "Detroit location match",
            "Active fundraising",
        ]
    );
    assert_eq!(top[0].match_level, 89);
}

#[test]
fn test_integration_missing_profile_passes_through() {
    let catalog = Catalog::bundled().unwrap();
    let outcome = Matcher::new().score_grants(None, &catalog.grants);

    assert_eq!(outcome, MatchOutcome::Unpersonalized(catalog.grants.clone()));
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["grants"], 20);
    assert_eq!(body["investors"], 8);
}

#[actix_web::test]
async fn test_match_with_inline_profile() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/grants/match")
        .set_json(json!({ "profile": saas_founder(), "limit": 5 }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["personalized"], true);
    assert_eq!(body["total_results"], 20);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(items[0]["matchLevel"].as_u64().unwrap() >= items[1]["matchLevel"].as_u64().unwrap());
    assert!(items[0]["matchReasons"].is_array());
    assert!(items[0]["organization"].is_string());
}

#[actix_web::test]
async fn test_unknown_founder_gets_unscored_catalog() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/investors/match")
        .set_json(json!({ "founderId": "nobody" }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["personalized"], false);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], "inv-001");
    assert!(items[0].get("matchLevel").is_none());
}

#[actix_web::test]
async fn test_stored_profile_drives_top_matches() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/profiles/founder-42")
        .set_json(saas_founder())
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/profiles/founder-42")
        .to_request();
    let stored: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["startup_industry"], "SaaS");

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/matches/top/founder-42?n=2")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["personalized"], true);
    assert_eq!(body["total_grants"], 20);
    assert_eq!(body["total_investors"], 8);
    let investors = body["investors"].as_array().unwrap();
    assert!(!investors.is_empty() && investors.len() <= 2);
    for item in investors.iter().chain(body["grants"].as_array().unwrap()) {
        assert_eq!(item["aiMatched"], true);
        assert!(item["matchLevel"].as_u64().unwrap() >= 70);
    }
}

#[actix_web::test]
async fn test_missing_profile_is_404() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/profiles/ghost")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_limit_rejected() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/grants/match")
        .set_json(json!({ "limit": 0 }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
