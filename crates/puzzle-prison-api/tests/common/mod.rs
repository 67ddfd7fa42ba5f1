//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use puzzle_prison_core::clock::Clock;
use puzzle_prison_core::repository::ProgressRepository;
use puzzle_prison_narrative::application::renderer::AudioConfig;
use puzzle_prison_store::pg_progress_repository::PgProgressRepository;
use puzzle_prison_test_support::FixedClock;
use sqlx::PgPool;
use tower::ServiceExt;

use puzzle_prison_api::routes;
use puzzle_prison_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router with a real `PgProgressRepository` and a fixed
/// clock. Uses the same route structure as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(Arc::new(PgProgressRepository::new(pool)))
}

/// Build the full app router over any progress repository.
pub fn build_test_app_with(progress_repository: Arc<dyn ProgressRepository>) -> Router {
    let app_state = AppState::new(fixed_clock(), progress_repository, AudioConfig::default());

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/turns", routes::turns::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Play one turn as `player_id`, carrying `attributes` from the previous turn.
pub async fn take_turn(
    app: Router,
    player_id: &str,
    attributes: &serde_json::Value,
    intent: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut body = serde_json::json!({ "playerId": player_id });
    for source in [attributes, intent] {
        if let Some(fields) = source.as_object() {
            for (key, value) in fields {
                body[key] = value.clone();
            }
        }
    }
    post_json(app, "/api/v1/turns", &body).await
}
