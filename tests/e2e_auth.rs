use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::Duration;
use serde_json::json;

mod support;

use support::test_app;

#[tokio::test]
async fn register_returns_public_user() {
    let app = test_app();

    let resp = app.register("alice", "Secret123!").await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.message(), "User successfully registered");
    assert_eq!(resp.json["user"]["username"], "alice");
    assert!(resp.json["user"]["id"].is_string());
    assert!(resp.json["user"].get("password_hash").is_none());
    assert!(!resp.json.to_string().contains("hash::"));
}

#[tokio::test]
async fn register_requires_both_fields() {
    let app = test_app();

    for body in [
        json!({ "username": "alice" }),
        json!({ "password": "pw" }),
        json!({ "username": "", "password": "pw" }),
        json!({ "username": "alice", "password": "" }),
        json!({}),
    ] {
        let resp = app
            .call(Method::POST, "/api/auth/register", Some(body.clone()), None)
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp.message(), "Username and password are required");
    }
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let app = test_app();
    assert_eq!(app.register("alice", "Secret123!").await.status, StatusCode::CREATED);

    let resp = app.register("alice", "Other456?").await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(resp.message(), "User with this username already exists");

    // The first registration's password still works.
    assert_eq!(app.login("alice", "Secret123!").await.status, StatusCode::OK);
    assert_eq!(app.login("alice", "Other456?").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_sets_http_only_session_cookie() {
    let app = test_app();
    app.register("alice", "Secret123!").await;

    let resp = app.login("alice", "Secret123!").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.message(), "Login successful");

    let header = resp.set_cookie_header().expect("set-cookie");
    assert!(header.starts_with("auth_token="));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
    assert!(header.contains("Path=/"));
    assert!(header.contains("Max-Age=3600"));
    assert!(resp.json.get("token").is_none());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = test_app();
    app.register("alice", "Secret123!").await;

    let wrong_password = app.login("alice", "nope").await;
    let unknown_user = app.login("mallory", "Secret123!").await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json, unknown_user.json);
    assert_eq!(wrong_password.message(), "Invalid login credentials");
    assert!(wrong_password.session_cookie().is_none());

    // The unknown user still paid for a password verification.
    assert_eq!(app.hasher.verifications(), 2);
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = test_app();
    let resp = app
        .call(
            Method::POST,
            "/api/auth/login",
            Some(json!({ "username": "alice" })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.message(), "Username and password are required");
}

#[tokio::test]
async fn check_reports_session_state() {
    let app = test_app();

    let anonymous = app.call(Method::GET, "/api/auth/check", None, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.json, json!({ "loggedIn": false }));

    let garbage = app
        .call(Method::GET, "/api/auth/check", None, Some("auth_token=garbage"))
        .await;
    assert_eq!(garbage.status, StatusCode::OK);
    assert_eq!(garbage.json, json!({ "loggedIn": false }));

    let (id, cookie) = app.sign_up("alice", "Secret123!").await;
    let resp = app.call(Method::GET, "/api/auth/check", None, Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["loggedIn"], true);
    assert_eq!(resp.json["user"]["id"], id.as_str());
    assert_eq!(resp.json["user"]["username"], "alice");
}

#[tokio::test]
async fn protected_routes_distinguish_missing_and_invalid_tokens() {
    let app = test_app();

    let missing = app.call(Method::GET, "/api/profile", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.message(), "No access. Please log in.");

    let invalid = app
        .call(Method::GET, "/api/profile", None, Some("auth_token=not.a-token"))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.message(), "Invalid token");
}

#[tokio::test]
async fn expired_session_is_invalid() {
    let app = test_app();
    let (_, cookie) = app.sign_up("alice", "Secret123!").await;

    app.clock.advance(Duration::seconds(3600));

    let resp = app.call(Method::GET, "/api/profile", None, Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.message(), "Invalid token");

    let check = app.call(Method::GET, "/api/auth/check", None, Some(&cookie)).await;
    assert_eq!(check.json, json!({ "loggedIn": false }));
}

#[tokio::test]
async fn logout_clears_cookie_and_requires_session() {
    let app = test_app();

    let anonymous = app.call(Method::POST, "/api/auth/logout", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let (_, cookie) = app.sign_up("alice", "Secret123!").await;
    let resp = app
        .call(Method::POST, "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.message(), "Logged out successfully");

    let header = resp.set_cookie_header().expect("removal cookie");
    assert!(header.starts_with("auth_token="));
    assert!(header.contains("Max-Age=0"));
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();
    let resp = app.call(Method::GET, "/health", None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json, json!({ "status": "ok" }));
}

#[tokio::test]
async fn malformed_bodies_are_json_validation_errors() {
    let app = test_app();

    let wrong_type = app
        .call(
            Method::POST,
            "/api/auth/register",
            Some(json!({ "username": 123, "password": "x" })),
            None,
        )
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.message(), "Invalid request body");
    assert_eq!(wrong_type.json["error"], "Bad Request");

    let bad_syntax = app
        .send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"username\": "))
                .unwrap(),
        )
        .await;
    assert_eq!(bad_syntax.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_syntax.message(), "Invalid request body");

    let no_content_type = app
        .send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/register")
                .body(Body::from(r#"{"username":"alice","password":"pw"}"#))
                .unwrap(),
        )
        .await;
    assert_eq!(no_content_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_content_type.message(), "Invalid request body");

    // Nothing was registered by the rejected attempts.
    assert_eq!(app.register("alice", "pw").await.status, StatusCode::CREATED);
}
