// tests/support/mocks/stores.rs
use async_trait::async_trait;
use chatme_core::domain::errors::{DomainError, DomainResult};
use chatme_core::domain::post::{NewPost, Post, PostId, PostRepository, PostUpdate};
use chatme_core::domain::user::{Bio, CredentialStore, NewUser, User, UserId, Username};

/// Never answers. Wrapped in a bounded decorator it exercises the timeout path.
pub struct StalledPostRepository;

#[async_trait]
impl PostRepository for StalledPostRepository {
    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        std::future::pending().await
    }

    async fn list_by_author(&self, _author_id: UserId) -> DomainResult<Vec<Post>> {
        std::future::pending().await
    }

    async fn update_owned(&self, _update: PostUpdate) -> DomainResult<Option<Post>> {
        std::future::pending().await
    }

    async fn delete_owned(&self, _id: PostId, _author_id: UserId) -> DomainResult<bool> {
        std::future::pending().await
    }
}

/// Behaves as if another registration committed the same username between
/// the availability lookup and the insert.
pub struct LostRaceCredentialStore;

#[async_trait]
impl CredentialStore for LostRaceCredentialStore {
    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn create(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::Conflict("duplicate key value violates users_username_key".into()))
    }

    async fn update_bio(&self, _id: UserId, _bio: Option<Bio>) -> DomainResult<User> {
        Err(DomainError::NotFound("user not found".into()))
    }

    async fn search_by_username(&self, _fragment: &str) -> DomainResult<Vec<User>> {
        Ok(Vec::new())
    }
}
