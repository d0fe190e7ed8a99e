use super::UserQueryService;
use crate::application::{
    dto::{UserSearchDto, UserSummaryDto},
    error::{ApplicationError, ApplicationResult},
};

pub const SEARCH_QUERY_REQUIRED: &str = "Search query is required";

impl UserQueryService {
    pub async fn search_users(&self, query: Option<String>) -> ApplicationResult<UserSearchDto> {
        let query = query
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation(SEARCH_QUERY_REQUIRED))?;

        let users: Vec<UserSummaryDto> = self
            .credential_store
            .search_by_username(query.trim())
            .await?
            .into_iter()
            .map(UserSummaryDto::from)
            .collect();

        Ok(UserSearchDto {
            query,
            count: users.len(),
            users,
        })
    }
}
