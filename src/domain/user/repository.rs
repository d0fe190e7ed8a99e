// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{Bio, UserId, Username},
};
use async_trait::async_trait;

/// Persistent username → credential mapping.
///
/// Implementations must make `create` an atomic check-and-insert: two
/// concurrent registrations of the same username yield exactly one success
/// and one `DomainError::Conflict`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn create(&self, new_user: NewUser) -> DomainResult<User>;

    /// Fails with `DomainError::NotFound` when the user does not exist.
    async fn update_bio(&self, id: UserId, bio: Option<Bio>) -> DomainResult<User>;

    /// Case-insensitive substring match on usernames, ordered by username.
    /// The fragment is matched literally.
    async fn search_by_username(&self, fragment: &str) -> DomainResult<Vec<User>>;
}
