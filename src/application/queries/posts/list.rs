use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostListDto},
        error::{ApplicationError, ApplicationResult},
        queries::users::USER_NOT_FOUND,
    },
    domain::user::UserId,
};

impl PostQueryService {
    pub async fn list_own(&self, actor: &AuthenticatedUser) -> ApplicationResult<PostListDto> {
        let posts = self.post_repo.list_by_author(actor.id).await?;
        Ok(posts.into())
    }

    pub async fn list_for_user(&self, raw_user_id: &str) -> ApplicationResult<PostListDto> {
        let id: UserId = raw_user_id
            .parse()
            .map_err(|_| ApplicationError::not_found(USER_NOT_FOUND))?;

        if self.credential_store.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(USER_NOT_FOUND));
        }

        let posts = self.post_repo.list_by_author(id).await?;
        Ok(posts.into())
    }
}
