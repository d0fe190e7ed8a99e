// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedUser, SessionTokenDto},
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on mismatch. Errors are reserved for hashes that cannot be
    /// parsed or a hashing backend that failed.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

/// Issues and checks self-contained session tokens. Verification is pure:
/// it depends only on the signing key and the current time.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: UserId) -> ApplicationResult<SessionTokenDto>;

    /// Every rejection reason surfaces as `ApplicationError::InvalidToken`.
    fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
