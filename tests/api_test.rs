//! HTTP API integration tests.
//!
//! Runs the real router over an in-memory SQLite database and an
//! in-process session store, driving whole flows through the wire
//! surface: register, login, profile, interests, clicks, logout.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::ConnectOptions;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use newsreader::api::routes::create_router;
use newsreader::config::{Config, MANAGER_SEED_EMAIL, MANAGER_SEED_PASSWORD};
use newsreader::errors::AppResult;
use newsreader::infra::{Database, SessionStore};
use newsreader::AppState;

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// In-process session store; a HashSet of active session ids.
#[derive(Default)]
struct MemorySessions {
    active: Mutex<HashSet<Uuid>>,
}

#[async_trait]
impl SessionStore for MemorySessions {
    async fn put(&self, session_id: Uuid, _user_id: Uuid, _ttl_seconds: u64) -> AppResult<()> {
        self.active.lock().unwrap().insert(session_id);
        Ok(())
    }

    async fn exists(&self, session_id: Uuid) -> AppResult<bool> {
        Ok(self.active.lock().unwrap().contains(&session_id))
    }

    async fn delete(&self, session_id: Uuid) -> AppResult<()> {
        self.active.lock().unwrap().remove(&session_id);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Full application over fresh in-memory infrastructure, seeds applied.
async fn app() -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    let connection = sea_orm::Database::connect(options)
        .await
        .expect("failed to open in-memory database");

    let database = Arc::new(Database::from_connection(connection));
    database.run_migrations().await.expect("migrations failed");

    let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessions::default());
    let state = AppState::from_config(database, sessions, Config::for_tests(TEST_SECRET));

    state.auth_service.ensure_manager_seed().await.unwrap();
    state.profile_service.ensure_interest_seed().await.unwrap();

    create_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    json_request("POST", uri, body, token)
}

fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn register_and_login(app: &Router, email: &str) -> String {
    let (status, _) = send(
        app,
        post_json(
            "/auth/register",
            json!({"email": email, "name": "Reader", "password": "password123"}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        post_json(
            "/auth/login",
            json!({"email": email, "password": "password123"}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_all_services() {
    let app = app().await;

    let (status, body) = send(&app, get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
    assert_eq!(body["services"]["sessions"]["status"], "healthy");
}

#[tokio::test]
async fn register_returns_created_without_password() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/auth/register",
            json!({"email": "new@example.com", "name": "New Reader", "password": "password123"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "new@example.com");
    assert_eq!(body["role"], "reader");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = app().await;
    register_and_login(&app, "dup@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/auth/register",
            json!({"email": "dup@example.com", "name": "Again", "password": "password123"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn malformed_registration_is_rejected() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/auth/register",
            json!({"email": "not-an-email", "name": "", "password": "short"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn bad_password_gets_generic_unauthorized() {
    let app = app().await;
    register_and_login(&app, "reader@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/auth/login",
            json!({"email": "reader@example.com", "password": "wrong-password"}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn profile_requires_a_session() {
    let app = app().await;

    let (status, _) = send(&app, get("/profile", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get("/profile", Some("bogus-token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_reader_flow() {
    let app = app().await;
    let token = register_and_login(&app, "flow@example.com").await;

    // Fresh profile: no interests, no clicks
    let (status, body) = send(&app, get("/profile", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "flow@example.com");
    assert_eq!(body["interests"], json!([]));
    assert_eq!(body["clicks"], json!([]));

    // Pick interests; the unknown one is dropped
    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/profile/interests",
            json!({"interests": ["Sports", "Tech", "Astrology"]}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Open an article
    let (status, body) = send(
        &app,
        post_json(
            "/clicks",
            json!({
                "article_title": "Rust ships a new release",
                "article_url": "https://news.example.com/rust-release"
            }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["article_title"], "Rust ships a new release");

    // Profile now reflects both
    let (status, body) = send(&app, get("/profile", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let interests: Vec<&str> = body["interests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(interests.contains(&"Sports"));
    assert!(interests.contains(&"Tech"));
    assert_eq!(body["clicks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn profile_edit_accepts_known_fields_only() {
    let app = app().await;
    let token = register_and_login(&app, "editor@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            "/profile",
            json!({"name": "Renamed"}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["email"], "editor@example.com");

    // Role is not an editable field; the whole payload is rejected
    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            "/profile",
            json!({"role": "manager"}),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // And the role did not change
    let (_, profile) = send(&app, get("/profile", Some(&token))).await;
    assert_eq!(profile["role"], "reader");
}

#[tokio::test]
async fn logout_destroys_the_session() {
    let app = app().await;
    let token = register_and_login(&app, "leaver@example.com").await;

    let (status, _) = send(&app, get("/profile", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        post_json("/auth/logout", json!({}), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");

    // The token no longer authenticates
    let (status, _) = send(&app, get("/profile", Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Logging out again is still a success
    let (status, _) = send(
        &app,
        post_json("/auth/logout", json!({}), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn seeded_manager_can_use_the_manager_gate() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/auth/manager/login",
            json!({"email": MANAGER_SEED_EMAIL, "password": MANAGER_SEED_PASSWORD}),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn reader_at_manager_gate_looks_like_bad_credentials() {
    let app = app().await;
    register_and_login(&app, "justareader@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/auth/manager/login",
            json!({"email": "justareader@example.com", "password": "password123"}),
            None,
        ),
    )
    .await;

    // Same status and code as a wrong password, never a 403
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn interests_listing_is_available_to_any_session() {
    let app = app().await;
    let token = register_and_login(&app, "curious@example.com").await;

    let (status, body) = send(&app, get("/interests", Some(&token))).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Sports"));
    assert!(names.contains(&"Tech"));
}

#[tokio::test]
async fn click_with_invalid_url_is_rejected() {
    let app = app().await;
    let token = register_and_login(&app, "clicker@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/clicks",
            json!({"article_title": "Headline", "article_url": "not a url"}),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
