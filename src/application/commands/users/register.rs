use super::{
    UserCommandService,
    credentials::{DUPLICATE_USERNAME, require_credentials},
};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{NewUser, PasswordHash, Username},
    },
};
use tracing::info;

pub struct RegisterUserCommand {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let (username, password) = require_credentials(command.username, command.password)?;
        let username = Username::new(username)?;

        self.ensure_username_available(&username).await?;

        let hashed = self.password_hasher.hash(&password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(username, password_hash, self.clock.now());

        // The lookup above is only a fast path; the store's atomic insert
        // decides races between concurrent registrations.
        let user = self
            .credential_store
            .create(new_user)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::conflict(DUPLICATE_USERNAME),
                other => other.into(),
            })?;

        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user.into())
    }

    async fn ensure_username_available(&self, username: &Username) -> ApplicationResult<()> {
        if self
            .credential_store
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict(DUPLICATE_USERNAME));
        }

        Ok(())
    }
}
