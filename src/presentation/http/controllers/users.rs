// src/presentation/http/controllers/users.rs
use crate::application::dto::UserSearchDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

pub async fn search_users(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<UserSearchDto>> {
    state
        .services
        .user_queries
        .search_users(params.q)
        .await
        .into_http()
        .map(Json)
}
