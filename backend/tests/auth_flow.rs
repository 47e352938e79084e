//! End-to-end tests covering the full session lifecycle on both principal
//! surfaces: register, login, profile, logout, and revocation.

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

use backend::app;
use backend::database::MIGRATOR;
use backend::utils::jwt::JwtUtils;

async fn test_server() -> TestServer {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    MIGRATOR.run(&pool).await.expect("failed to run migrations");

    let jwt = JwtUtils::with_secret("integration-secret", 3600);
    TestServer::new(app(pool, jwt)).expect("failed to start test server")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn token_cookie(token: &str) -> String {
    format!("token={token}")
}

fn user_body() -> Value {
    json!({
        "fullname": { "firstname": "Ann", "lastname": "Harper" },
        "email": "a@b.com",
        "password": "secret1"
    })
}

fn captain_body() -> Value {
    json!({
        "fullname": { "firstname": "Maya", "lastname": "Okafor" },
        "email": "maya@fleet.com",
        "password": "secret1",
        "vehicle": {
            "color": "black",
            "plate": "KA-01-7777",
            "capacity": 4,
            "vehicleType": "car"
        }
    })
}

#[tokio::test]
async fn user_session_lifecycle() {
    let server = test_server().await;

    let response = server.post("/api/users/register").json(&user_body()).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let token = body["token"].as_str().expect("token missing").to_string();
    assert!(!token.is_empty());
    assert_eq!(body["user"]["email"], "a@b.com");
    assert_eq!(body["user"]["fullname"]["firstname"], "Ann");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let response = server
        .post("/api/users/login")
        .json(&json!({ "email": "a@b.com", "password": "wrong-pass" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid email or password");

    let response = server
        .post("/api/users/login")
        .json(&json!({ "email": "a@b.com", "password": "secret1" }))
        .await;
    response.assert_status(StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("token="));
    let body: Value = response.json();
    let login_token = body["token"].as_str().unwrap().to_string();

    let response = server
        .get("/api/users/profile")
        .add_header("authorization", bearer(&token))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], "a@b.com");
    assert!(body.get("password_hash").is_none());

    let response = server
        .get("/api/users/logout")
        .add_header("authorization", bearer(&token))
        .await;
    response.assert_status(StatusCode::OK);
    let cleared = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie missing")
        .to_str()
        .unwrap();
    assert!(cleared.contains("Max-Age=0"));

    // The revoked token is rejected on every subsequent request.
    let response = server
        .get("/api/users/profile")
        .add_header("authorization", bearer(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Unauthorized");

    // Revocation is per-token: the second session is still valid.
    let response = server
        .get("/api/users/profile")
        .add_header("authorization", bearer(&login_token))
        .await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn bad_logins_carry_no_enumeration_signal() {
    let server = test_server().await;
    server.post("/api/users/register").json(&user_body()).await;

    let wrong_password = server
        .post("/api/users/login")
        .json(&json!({ "email": "a@b.com", "password": "wrong-pass" }))
        .await;
    let unknown_email = server
        .post("/api/users/login")
        .json(&json!({ "email": "ghost@b.com", "password": "wrong-pass" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    let a: Value = wrong_password.json();
    let b: Value = unknown_email.json();
    assert_eq!(a, b);
}

#[tokio::test]
async fn registration_reports_every_violation() {
    let server = test_server().await;

    let response = server
        .post("/api/users/register")
        .json(&json!({
            "fullname": { "firstname": "An" },
            "email": "not-an-email",
            "password": "short"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let errors = body["errors"].as_array().expect("errors missing");
    assert_eq!(errors.len(), 3);
    let messages: Vec<&str> = errors
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert!(messages.contains(&"Invalid Email"));
    assert!(messages.contains(&"First name must be at least 3 characters long"));
    assert!(messages.contains(&"Password must be at least 6 characters long"));
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let server = test_server().await;

    let response = server.post("/api/users/register").json(&user_body()).await;
    response.assert_status(StatusCode::CREATED);

    let response = server.post("/api/users/register").json(&user_body()).await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn missing_token_is_rejected() {
    let server = test_server().await;

    let response = server.get("/api/users/profile").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Unauthorized");
}

#[tokio::test]
async fn cookie_transport_is_accepted_and_preferred() {
    let server = test_server().await;

    let response = server.post("/api/users/register").json(&user_body()).await;
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap().to_string();

    let response = server
        .get("/api/users/profile")
        .add_header("cookie", token_cookie(&token))
        .await;
    response.assert_status(StatusCode::OK);

    // The cookie wins even when a garbage bearer header is also present.
    let response = server
        .get("/api/users/profile")
        .add_header("cookie", token_cookie(&token))
        .add_header("authorization", "Bearer garbage")
        .await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn captain_session_lifecycle() {
    let server = test_server().await;

    let response = server
        .post("/api/captains/register")
        .json(&captain_body())
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let token = body["token"].as_str().expect("token missing").to_string();
    assert_eq!(body["captain"]["email"], "maya@fleet.com");
    assert_eq!(body["captain"]["vehicle"]["vehicleType"], "car");
    assert_eq!(body["captain"]["vehicle"]["capacity"], 4);
    assert_eq!(body["captain"]["status"], "inactive");
    assert!(body["captain"].get("password_hash").is_none());

    let response = server
        .get("/api/captains/profile")
        .add_header("cookie", token_cookie(&token))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["vehicle"]["plate"], "KA-01-7777");

    let response = server
        .get("/api/captains/logout")
        .add_header("authorization", bearer(&token))
        .await;
    response.assert_status(StatusCode::OK);

    let response = server
        .get("/api/captains/profile")
        .add_header("authorization", bearer(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn principal_surfaces_are_isolated() {
    let server = test_server().await;

    let response = server.post("/api/users/register").json(&user_body()).await;
    let body: Value = response.json();
    let user_token = body["token"].as_str().unwrap().to_string();

    let response = server
        .post("/api/captains/register")
        .json(&captain_body())
        .await;
    let body: Value = response.json();
    let captain_token = body["token"].as_str().unwrap().to_string();

    // A rider token does not authorize the captain surface, and vice versa.
    let response = server
        .get("/api/captains/profile")
        .add_header("authorization", bearer(&user_token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/users/profile")
        .add_header("authorization", bearer(&captain_token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}
