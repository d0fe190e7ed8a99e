use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::test_app;

#[tokio::test]
async fn profile_greets_the_caller() {
    let app = test_app();
    let (id, cookie) = app.sign_up("alice", "Secret123!").await;

    let resp = app.call(Method::GET, "/api/profile", None, Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.message(), "Welcome, alice!");
    assert_eq!(resp.json["user"]["id"], id.as_str());
    assert_eq!(resp.json["user"]["bio"], "");
}

#[tokio::test]
async fn bio_can_be_set_and_cleared() {
    let app = test_app();
    let (_, cookie) = app.sign_up("alice", "Secret123!").await;

    let set = app
        .call(
            Method::PUT,
            "/api/profile",
            Some(json!({ "bio": "hello there" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(set.status, StatusCode::OK);
    assert_eq!(set.message(), "Profile updated successfully");
    assert_eq!(set.json["user"]["bio"], "hello there");

    let fetched = app.call(Method::GET, "/api/profile", None, Some(&cookie)).await;
    assert_eq!(fetched.json["user"]["bio"], "hello there");

    let cleared = app
        .call(Method::PUT, "/api/profile", Some(json!({})), Some(&cookie))
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert_eq!(cleared.json["user"]["bio"], "");
}

#[tokio::test]
async fn overlong_bio_is_rejected() {
    let app = test_app();
    let (_, cookie) = app.sign_up("alice", "Secret123!").await;

    let resp = app
        .call(
            Method::PUT,
            "/api/profile",
            Some(json!({ "bio": "b".repeat(501) })),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let fetched = app.call(Method::GET, "/api/profile", None, Some(&cookie)).await;
    assert_eq!(fetched.json["user"]["bio"], "");
}

#[tokio::test]
async fn public_profile_by_id() {
    let app = test_app();
    let (alice_id, _) = app.sign_up("alice", "Secret123!").await;
    let (_, bob) = app.sign_up("bob", "Secret456!").await;

    let resp = app
        .call(Method::GET, &format!("/api/profile/{alice_id}"), None, Some(&bob))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["user"]["username"], "alice");

    let missing = app
        .call(Method::GET, "/api/profile/not-a-user", None, Some(&bob))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.message(), "User not found");

    let anonymous = app
        .call(Method::GET, &format!("/api/profile/{alice_id}"), None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_answers_with_trailing_slash() {
    let app = test_app();
    let (_, cookie) = app.sign_up("alice", "Secret123!").await;

    let updated = app
        .call(
            Method::PUT,
            "/api/profile/",
            Some(json!({ "bio": "x" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.message(), "Profile updated successfully");

    let fetched = app.call(Method::GET, "/api/profile/", None, Some(&cookie)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.message(), "Welcome, alice!");
    assert_eq!(fetched.json["user"]["bio"], "x");

    let anonymous = app.call(Method::GET, "/api/profile/", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_json_profile_body_is_a_validation_error() {
    let app = test_app();
    let (_, cookie) = app.sign_up("alice", "Secret123!").await;

    let resp = app
        .call(
            Method::PUT,
            "/api/profile",
            Some(json!({ "bio": 42 })),
            Some(&cookie),
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.message(), "Invalid request body");
}
