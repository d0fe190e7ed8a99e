// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, posts, profile, users};
use crate::presentation::http::middleware::{auth_rate_limit_layer, require_session};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub fn build_router_with_rate_limiter(
    state: HttpState,
    allowed_origins: &[String],
    rate_limited: bool,
) -> Router {
    let mut credentials = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    if rate_limited {
        match auth_rate_limit_layer() {
            Some(layer) => credentials = credentials.layer(layer),
            None => warn!("rate limiter configuration rejected; credential routes are unthrottled"),
        }
    }

    let own_posts = get(posts::list_own_posts).post(posts::create_post);
    let own_profile = get(profile::get_profile).put(profile::update_profile);

    // Collection paths answer with and without a trailing slash.
    let protected = Router::new()
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/posts", own_posts.clone())
        .route("/api/posts/", own_posts)
        .route(
            "/api/posts/{id}",
            get(posts::list_user_posts)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/profile", own_profile.clone())
        .route("/api/profile/", own_profile)
        .route("/api/profile/{user_id}", get(profile::get_public_profile))
        .route("/api/users/search", get(users::search_users))
        .route_layer(from_fn(require_session));

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/check", get(auth::check))
        .merge(credentials)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// Credentialed CORS: browsers refuse wildcard origins once cookies are
/// involved, so only the configured origins are echoed back.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) if value != "*" => Some(value),
            _ => {
                warn!(origin = %origin, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
