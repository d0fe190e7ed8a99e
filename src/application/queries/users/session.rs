use super::UserQueryService;
use crate::application::dto::{SessionStatusDto, UserDto};
use tracing::warn;

impl UserQueryService {
    /// Never fails: anything short of a valid token for an existing user is
    /// reported as "not logged in".
    pub async fn check_session(&self, token: Option<&str>) -> SessionStatusDto {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return SessionStatusDto::anonymous();
        };

        let Ok(identity) = self.token_service.verify(token) else {
            return SessionStatusDto::anonymous();
        };

        match self.credential_store.find_by_id(identity.id).await {
            Ok(Some(user)) => SessionStatusDto::logged_in(UserDto::from(user)),
            Ok(None) => SessionStatusDto::anonymous(),
            Err(err) => {
                warn!(user_id = %identity.id, error = %err, "session check could not load user");
                SessionStatusDto::anonymous()
            }
        }
    }
}
