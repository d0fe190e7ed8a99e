// tests/support/helpers.rs
use super::mocks::{MockClock, PlainPasswordHasher, RecordingNotifier, TEST_SIGNING_KEY};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use chatme_core::{
    application::{
        ports::{notification::Notifier, time::Clock},
        services::ApplicationServices,
    },
    domain::{post::PostRepository, user::CredentialStore},
    infrastructure::{
        repositories::{InMemoryCredentialStore, InMemoryFriendDirectory, InMemoryPostRepository},
        security::token::HmacTokenService,
    },
    presentation::http::{
        routes::build_router_with_rate_limiter,
        state::{CookieSettings, HttpState},
    },
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::util::ServiceExt as _;

pub const TOKEN_TTL: Duration = Duration::from_secs(3600);
pub const TEST_ORIGIN: &str = "https://localhost:5173";

/// Router over in-memory stores plus handles on the pieces tests poke at.
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<MockClock>,
    pub hasher: Arc<PlainPasswordHasher>,
    pub notifier: Arc<RecordingNotifier>,
    pub friends: Arc<InMemoryFriendDirectory>,
    pub credentials: Arc<InMemoryCredentialStore>,
    pub services: Arc<ApplicationServices>,
}

pub struct TestAppBuilder {
    posts: Arc<dyn PostRepository>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            notifier: None,
        }
    }
}

impl TestAppBuilder {
    pub fn with_posts(mut self, posts: Arc<dyn PostRepository>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> TestApp {
        let clock = Arc::new(MockClock::default());
        let hasher = Arc::new(PlainPasswordHasher::default());
        let recording = Arc::new(RecordingNotifier::default());
        let friends = Arc::new(InMemoryFriendDirectory::new());
        let credentials = Arc::new(InMemoryCredentialStore::new());

        let token_service =
            HmacTokenService::new(TEST_SIGNING_KEY, TOKEN_TTL, clock.clone() as Arc<dyn Clock>)
                .expect("token service");
        let notifier: Arc<dyn Notifier> = self
            .notifier
            .unwrap_or_else(|| recording.clone() as Arc<dyn Notifier>);

        let services = Arc::new(ApplicationServices::new(
            credentials.clone() as Arc<dyn CredentialStore>,
            self.posts,
            friends.clone(),
            hasher.clone(),
            Arc::new(token_service),
            notifier,
            clock.clone(),
        ));

        let state = HttpState {
            services: Arc::clone(&services),
            cookies: CookieSettings {
                secure: false,
                max_age_secs: i64::try_from(TOKEN_TTL.as_secs()).unwrap(),
            },
        };
        let router = build_router_with_rate_limiter(state, &[TEST_ORIGIN.to_string()], false);

        TestApp {
            router,
            clock,
            hasher,
            notifier: recording,
            friends,
            credentials,
            services,
        }
    }
}

pub fn test_app() -> TestApp {
    TestAppBuilder::default().build()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub json: Value,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.json
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// `name=value` of the `auth_token` cookie set by this response, if any.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("auth_token="))
            .map(|value| value.split(';').next().unwrap_or_default().to_string())
    }

    pub fn set_cookie_header(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let resp = self.router.clone().oneshot(req).await.expect("router call");
        let (parts, body_stream) = resp.into_parts();
        let bytes = body::to_bytes(body_stream, 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            json,
        }
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        self.send(build_request(method, uri, body, cookie)).await
    }

    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.call(
            Method::POST,
            "/api/auth/register",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.call(
            Method::POST,
            "/api/auth/login",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Register and log in; returns the user id and the session cookie.
    pub async fn sign_up(&self, username: &str, password: &str) -> (String, String) {
        let registered = self.register(username, password).await;
        assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.json);
        let id = registered.json["user"]["id"]
            .as_str()
            .expect("user id")
            .to_string();

        let logged_in = self.login(username, password).await;
        assert_eq!(logged_in.status, StatusCode::OK, "{:?}", logged_in.json);
        let cookie = logged_in.session_cookie().expect("session cookie");
        (id, cookie)
    }

    pub async fn create_post(&self, cookie: &str, content: &str) -> TestResponse {
        self.call(
            Method::POST,
            "/api/posts",
            Some(serde_json::json!({ "content": content })),
            Some(cookie),
        )
        .await
    }
}

pub fn build_request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
