use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
        queries::users::USER_NOT_FOUND,
    },
    domain::{errors::DomainError, user::Bio},
};
use tracing::info;

pub struct UpdateProfileCommand {
    /// `None` clears the bio.
    pub bio: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let bio = command.bio.map(Bio::new).transpose()?;

        let user = self
            .credential_store
            .update_bio(actor.id, bio)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => ApplicationError::not_found(USER_NOT_FOUND),
                other => other.into(),
            })?;

        info!(user_id = %user.id, "profile updated");
        Ok(user.into())
    }
}
