use super::{
    UserCommandService,
    credentials::{invalid_credentials, require_credentials},
};
use crate::{
    application::{
        dto::{SessionTokenDto, UserDto},
        error::ApplicationResult,
    },
    domain::user::{User, Username},
};
use tracing::{debug, info};

/// Well-formed argon2id hash that matches no password. Verifying against it
/// costs the same as a real check, so unknown usernames are not faster to
/// reject than wrong passwords.
pub const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

pub struct LoginUserCommand {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct LoginResult {
    pub token: SessionTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let (username, password) = require_credentials(command.username, command.password)?;
        let user = self
            .find_and_authenticate_user(&username, &password)
            .await?;

        let token = self.token_service.issue(user.id)?;
        info!(user_id = %user.id, "user logged in");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        // A name that fails validation cannot belong to an account.
        let found = match Username::new(username) {
            Ok(name) => self.credential_store.find_by_username(&name).await?,
            Err(_) => None,
        };

        let Some(user) = found else {
            let _ = self
                .password_hasher
                .verify(password, DUMMY_PASSWORD_HASH)
                .await;
            debug!("login rejected");
            return Err(invalid_credentials());
        };

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?
        {
            debug!("login rejected");
            return Err(invalid_credentials());
        }

        Ok(user)
    }
}
