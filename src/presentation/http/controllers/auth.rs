// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{SessionStatusDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::{CookieSettings, HttpState, SESSION_COOKIE};
use axum::{Extension, Json, http::StatusCode};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use serde::{Deserialize, Serialize};
use time::Duration;

/// Both fields are optional so that a missing field is reported with the
/// same message as an empty one instead of as a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: String,
    pub user: UserDto,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> HttpResult<(StatusCode, Json<UserResponse>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User successfully registered".into(),
            user,
        }),
    ))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> HttpResult<(CookieJar, Json<MessageResponse>)> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    let cookie = session_cookie(&state.cookies, &result.token.token, result.token.expires_in);

    Ok((jar.add(cookie), Json(MessageResponse::new("Login successful"))))
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    jar: CookieJar,
) -> HttpResult<(CookieJar, Json<MessageResponse>)> {
    state
        .services
        .user_commands
        .logout(&user)
        .await
        .into_http()?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((jar, Json(MessageResponse::new("Logged out successfully"))))
}

pub async fn check(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
) -> Json<SessionStatusDto> {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value());
    Json(state.services.user_queries.check_session(token).await)
}

fn session_cookie(settings: &CookieSettings, token: &str, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_owned()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age_secs.min(settings.max_age_secs)))
        .secure(settings.secure)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_and_scoped() {
        let settings = CookieSettings {
            secure: true,
            max_age_secs: 3600,
        };
        let cookie = session_cookie(&settings, "abc.def", 7200);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc.def");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(3600));
    }

    #[test]
    fn insecure_cookie_omits_secure_flag() {
        let settings = CookieSettings {
            secure: false,
            max_age_secs: 3600,
        };
        let cookie = session_cookie(&settings, "abc.def", 60);

        assert_eq!(cookie.secure(), Some(false));
        assert!(!cookie.to_string().contains("Secure"));
        assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(60));
    }
}
