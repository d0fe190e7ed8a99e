// src/domain/social.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Read side of the friendship graph. Managing friendships is handled
/// elsewhere; this service only needs to know whom to notify.
#[async_trait]
pub trait FriendDirectory: Send + Sync {
    async fn friends_of(&self, user_id: UserId) -> DomainResult<Vec<UserId>>;
}
