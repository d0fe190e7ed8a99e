use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostContent, PostId, PostUpdate},
};
use tracing::info;

pub const POST_NOT_FOUND_UPDATE: &str = "Post not found or you don't have permission to edit it";

pub struct UpdatePostCommand {
    pub post_id: String,
    pub content: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let content = PostContent::new(command.content.unwrap_or_default())?;
        let id = PostId::parse(&command.post_id)
            .ok_or_else(|| ApplicationError::not_found(POST_NOT_FOUND_UPDATE))?;

        let update = PostUpdate {
            id,
            author_id: actor.id,
            content,
            updated_at: self.clock.now(),
        };

        let post = self
            .post_repo
            .update_owned(update)
            .await?
            .ok_or_else(|| ApplicationError::not_found(POST_NOT_FOUND_UPDATE))?;

        info!(post_id = %post.id, author_id = %actor.id, "post updated");
        Ok(post.into())
    }
}
