// src/presentation/http/extractors.rs
use crate::{application::dto::AuthenticatedUser, presentation::http::error::HttpError};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const INVALID_BODY: &str = "Invalid request body";

/// Identity placed in the request extensions by `require_session`.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only reachable when a handler is mounted without the session layer.
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(Self)
            .ok_or_else(HttpError::internal)
    }
}

/// `Json<T>` whose rejections (syntax, field types, content type) are all
/// reported as a 400 in the regular error envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(
                    status = %rejection.status(),
                    reason = %rejection.body_text(),
                    "rejected request body"
                );
                Err(HttpError::bad_request(INVALID_BODY))
            }
        }
    }
}
