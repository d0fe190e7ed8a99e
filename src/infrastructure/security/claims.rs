// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed payload of a session token. Timestamps are unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
    pub jti: Uuid,
}

impl TokenClaims {
    pub fn new(user_id: UserId, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id.as_uuid(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        }
    }

    /// Expiry is exclusive: a token is dead at the second it expires.
    pub fn into_authenticated(self, now: DateTime<Utc>) -> ApplicationResult<AuthenticatedUser> {
        if now.timestamp() >= self.exp {
            return Err(ApplicationError::InvalidToken);
        }

        let issued_at =
            DateTime::from_timestamp(self.iat, 0).ok_or(ApplicationError::InvalidToken)?;
        let expires_at =
            DateTime::from_timestamp(self.exp, 0).ok_or(ApplicationError::InvalidToken)?;

        Ok(AuthenticatedUser {
            id: UserId::from(self.sub),
            issued_at,
            expires_at,
        })
    }
}
