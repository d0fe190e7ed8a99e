use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};
use tracing::info;

impl UserCommandService {
    /// Tokens are self-contained, so there is nothing to revoke server-side.
    /// Requiring an `AuthenticatedUser` keeps anonymous callers out.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        info!(user_id = %actor.id, "user logged out");
        Ok(())
    }
}
