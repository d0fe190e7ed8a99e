// src/presentation/http/controllers/profile.rs
use crate::application::{commands::users::UpdateProfileCommand, dto::UserDto};
use crate::presentation::http::controllers::auth::UserResponse;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublicProfileResponse {
    pub user: UserDto,
}

pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserResponse>> {
    let user = state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()?;

    Ok(Json(UserResponse {
        message: format!("Welcome, {}!", user.username),
        user,
    }))
}

pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<UpdateProfileRequest>,
) -> HttpResult<Json<UserResponse>> {
    let user = state
        .services
        .user_commands
        .update_profile(&user, UpdateProfileCommand { bio: payload.bio })
        .await
        .into_http()?;

    Ok(Json(UserResponse {
        message: "Profile updated successfully".into(),
        user,
    }))
}

pub async fn get_public_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(user_id): Path<String>,
) -> HttpResult<Json<PublicProfileResponse>> {
    state
        .services
        .user_queries
        .get_public_profile(&user_id)
        .await
        .into_http()
        .map(|user| Json(PublicProfileResponse { user }))
}
