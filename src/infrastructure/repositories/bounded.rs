// src/infrastructure/repositories/bounded.rs
//! Deadline wrappers for the storage ports.
//!
//! Each call is raced against a fixed timeout. An elapsed deadline surfaces
//! as `DomainError::Unavailable` so handlers answer 503 instead of hanging.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{NewPost, Post, PostId, PostRepository, PostUpdate};
use crate::domain::social::FriendDirectory;
use crate::domain::user::{Bio, CredentialStore, NewUser, User, UserId, Username};
use async_trait::async_trait;
use std::{future::Future, sync::Arc, time::Duration};
use tracing::warn;

async fn within<T>(
    limit: Duration,
    operation: &'static str,
    fut: impl Future<Output = DomainResult<T>>,
) -> DomainResult<T> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation, timeout = ?limit, "store call timed out");
            Err(DomainError::Unavailable(format!("{operation} timed out")))
        }
    }
}

pub struct BoundedCredentialStore {
    inner: Arc<dyn CredentialStore>,
    limit: Duration,
}

impl BoundedCredentialStore {
    pub fn new(inner: Arc<dyn CredentialStore>, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl CredentialStore for BoundedCredentialStore {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        within(self.limit, "users.find_by_username", self.inner.find_by_username(username)).await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        within(self.limit, "users.find_by_id", self.inner.find_by_id(id)).await
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        within(self.limit, "users.create", self.inner.create(new_user)).await
    }

    async fn update_bio(&self, id: UserId, bio: Option<Bio>) -> DomainResult<User> {
        within(self.limit, "users.update_bio", self.inner.update_bio(id, bio)).await
    }

    async fn search_by_username(&self, fragment: &str) -> DomainResult<Vec<User>> {
        within(
            self.limit,
            "users.search_by_username",
            self.inner.search_by_username(fragment),
        )
        .await
    }
}

pub struct BoundedPostRepository {
    inner: Arc<dyn PostRepository>,
    limit: Duration,
}

impl BoundedPostRepository {
    pub fn new(inner: Arc<dyn PostRepository>, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl PostRepository for BoundedPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        within(self.limit, "posts.insert", self.inner.insert(post)).await
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        within(self.limit, "posts.list_by_author", self.inner.list_by_author(author_id)).await
    }

    async fn update_owned(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        within(self.limit, "posts.update_owned", self.inner.update_owned(update)).await
    }

    async fn delete_owned(&self, id: PostId, author_id: UserId) -> DomainResult<bool> {
        within(self.limit, "posts.delete_owned", self.inner.delete_owned(id, author_id)).await
    }
}

pub struct BoundedFriendDirectory {
    inner: Arc<dyn FriendDirectory>,
    limit: Duration,
}

impl BoundedFriendDirectory {
    pub fn new(inner: Arc<dyn FriendDirectory>, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl FriendDirectory for BoundedFriendDirectory {
    async fn friends_of(&self, user_id: UserId) -> DomainResult<Vec<UserId>> {
        within(self.limit, "friends.friends_of", self.inner.friends_of(user_id)).await
    }
}
