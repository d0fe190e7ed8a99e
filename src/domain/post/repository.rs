// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::{
    entity::{NewPost, Post, PostUpdate},
    value_objects::PostId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Post storage. Mutations are conditional on ownership and must be atomic:
/// a post is only changed or removed when its stored author matches the
/// caller, in the same operation that performs the change.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    /// Newest first.
    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>>;

    /// Returns `None` when the post is missing or owned by someone else.
    async fn update_owned(&self, update: PostUpdate) -> DomainResult<Option<Post>>;

    /// Returns `false` when the post is missing or owned by someone else.
    async fn delete_owned(&self, id: PostId, author_id: UserId) -> DomainResult<bool>;
}
