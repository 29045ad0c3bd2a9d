//! Web API Authentication Tests
//!
//! Integration tests for the register and login endpoints.

use axum_test::TestServer;
use reservas::auth::JwtState;
use reservas::config::Config;
use reservas::web::handlers::AppState;
use reservas::web::router::create_router;
use reservas::Database;
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test configuration.
fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.auth.jwt_secret = "test-secret-key-for-testing-only".to_string();
    config
}

/// Create a test server with an in-memory database.
async fn create_test_server() -> TestServer {
    let config = create_test_config();

    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db, &config));
    let jwt_state = Arc::new(JwtState::new(&config.auth.jwt_secret));

    let router = create_router(app_state, jwt_state, &config.server.cors_origins);

    TestServer::new(router).expect("Failed to create test server")
}

/// Helper to register a test user and return the response body.
async fn register_test_user(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .await;

    response.json::<Value>()
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["data"]["token"].is_string());
    assert_eq!(body["data"]["expires_in"], 3600);
    assert_eq!(body["data"]["user"]["email"], "test@example.com");
    assert!(body["data"]["user"]["id"].is_number());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = create_test_server().await;

    server
        .post("/api/auth/register")
        .json(&json!({
            "email": "test@example.com",
            "password": "password123"
        }))
        .await
        .assert_status_ok();

    // Same email again
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "test@example.com",
            "password": "password456"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_short_password() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "test@example.com",
            "password": "12345"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["password"][0]
        .as_str()
        .unwrap()
        .contains("at least 6"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "not-an-email",
            "password": "password123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert!(body["error"]["details"]["email"].is_array());
}

#[tokio::test]
async fn test_register_reports_all_failing_fields() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "no-at-sign",
            "password": "short"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert!(body["error"]["details"]["email"].is_array());
    assert!(body["error"]["details"]["password"].is_array());
}

#[tokio::test]
async fn test_register_empty_email() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "",
            "password": "password123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_does_not_return_password() {
    let server = create_test_server().await;

    let body = register_test_user(&server, "test@example.com", "password123").await;

    assert!(body["data"]["user"]["password"].is_null());
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server().await;

    register_test_user(&server, "login@example.com", "password123").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "login@example.com",
            "password": "password123"
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["data"]["token"].is_string());
    assert_eq!(body["data"]["user"]["email"], "login@example.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = create_test_server().await;

    register_test_user(&server, "login@example.com", "password123").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "login@example.com",
            "password": "wrongpassword"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "password123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_wrong_password_indistinguishable_from_unknown_email() {
    let server = create_test_server().await;

    register_test_user(&server, "login@example.com", "password123").await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "login@example.com",
            "password": "wrongpassword"
        }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(wrong_password.status_code(), unknown_email.status_code());
    assert_eq!(
        wrong_password.json::<Value>()["error"]["message"],
        unknown_email.json::<Value>()["error"]["message"]
    );
}

#[tokio::test]
async fn test_login_empty_credentials() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "",
            "password": ""
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

// ============================================================================
// Token Claims Tests
// ============================================================================

#[tokio::test]
async fn test_token_contains_expected_claims() {
    let server = create_test_server().await;

    let body = register_test_user(&server, "claims@example.com", "password123").await;
    let token = body["data"]["token"].as_str().expect("No token");

    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "JWT should have 3 parts");

    // Base64 decode the payload
    use base64::Engine;
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let payload = engine
        .decode(parts[1])
        .expect("Failed to decode JWT payload");
    let claims: Value = serde_json::from_slice(&payload).expect("Failed to parse claims");

    assert_eq!(claims["email"], "claims@example.com");
    assert!(claims["sub"].is_number());
    assert!(claims["iat"].is_number());
    assert!(claims["exp"].is_number());
    assert!(claims["jti"].is_string());

    // Expiry is one hour after issuance
    let iat = claims["iat"].as_i64().unwrap();
    let exp = claims["exp"].as_i64().unwrap();
    assert_eq!(exp - iat, 3600);
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root_liveness() {
    let server = create_test_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();
}
