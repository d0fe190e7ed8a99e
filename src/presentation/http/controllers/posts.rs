// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDto, PostListDto},
};
use crate::presentation::http::controllers::auth::MessageResponse;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PostContentRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub message: String,
    pub post: PostDto,
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<PostContentRequest>,
) -> HttpResult<(StatusCode, Json<PostResponse>)> {
    let post = state
        .services
        .post_commands
        .create_post(&user, CreatePostCommand {
            content: payload.content,
        })
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            message: "Post created successfully".into(),
            post,
        }),
    ))
}

pub async fn list_own_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<PostListDto>> {
    state
        .services
        .post_queries
        .list_own(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_user_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(user_id): Path<String>,
) -> HttpResult<Json<PostListDto>> {
    state
        .services
        .post_queries
        .list_for_user(&user_id)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<String>,
    JsonBody(payload): JsonBody<PostContentRequest>,
) -> HttpResult<Json<PostResponse>> {
    let command = UpdatePostCommand {
        post_id,
        content: payload.content,
    };

    let post = state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()?;

    Ok(Json(PostResponse {
        message: "Post updated successfully".into(),
        post,
    }))
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(post_id): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { post_id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
