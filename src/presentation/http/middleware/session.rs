// src/presentation/http/middleware/session.rs
use crate::presentation::http::{
    error::HttpError,
    state::{HttpState, SESSION_COOKIE},
};
use axum::{
    Extension,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use tracing::debug;

/// Rejects requests without a usable `auth_token` cookie and hands the
/// verified identity to handlers through the request extensions.
pub async fn require_session(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value());

    match state.services.authenticate_session(token) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            debug!(path = %req.uri().path(), error = %err, "session rejected");
            HttpError::from_error(err).into_response()
        }
    }
}
