use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub const USER_NOT_FOUND: &str = "User not found";

impl UserQueryService {
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        self.load_user(actor.id).await
    }

    /// Profile of any user, addressed by the raw id from the request path.
    pub async fn get_public_profile(&self, raw_user_id: &str) -> ApplicationResult<UserDto> {
        let id: UserId = raw_user_id
            .parse()
            .map_err(|_| ApplicationError::not_found(USER_NOT_FOUND))?;
        self.load_user(id).await
    }

    async fn load_user(&self, id: UserId) -> ApplicationResult<UserDto> {
        self.credential_store
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found(USER_NOT_FOUND))
    }
}
