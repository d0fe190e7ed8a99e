use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{NewPost, PostContent},
};
use tracing::info;

pub struct CreatePostCommand {
    pub content: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let content = PostContent::new(command.content.unwrap_or_default())?;

        // The subject may be missing from a store that was reset after the
        // token was issued.
        let author = self
            .credential_store
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        let new_post = NewPost {
            author_id: author.id,
            content,
            created_at: self.clock.now(),
        };
        let post = self.post_repo.insert(new_post).await?;
        info!(post_id = %post.id, author_id = %author.id, "post created");

        self.dispatch_new_post_notifications(&author, &post);

        Ok(post.into())
    }
}
