use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};
use tracing::{debug, info};

/// Shared by "no such post" and "not your post".
pub const POST_NOT_FOUND_DELETE: &str =
    "Post not found or you don't have permission to delete it";

pub struct DeletePostCommand {
    pub post_id: String,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::parse(&command.post_id)
            .ok_or_else(|| ApplicationError::not_found(POST_NOT_FOUND_DELETE))?;

        if !self.post_repo.delete_owned(id, actor.id).await? {
            debug!(post_id = %id, actor = %actor.id, "delete matched no owned post");
            return Err(ApplicationError::not_found(POST_NOT_FOUND_DELETE));
        }

        info!(post_id = %id, author_id = %actor.id, "post deleted");
        Ok(())
    }
}
