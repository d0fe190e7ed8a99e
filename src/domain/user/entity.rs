// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Bio, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub bio: Option<Bio>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn set_bio(&mut self, bio: Option<Bio>) {
        self.bio = bio;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: Username, password_hash: PasswordHash, created_at: DateTime<Utc>) -> Self {
        Self {
            username,
            password_hash,
            created_at,
        }
    }

    /// Materialise the record once the store has assigned an identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            bio: None,
            created_at: self.created_at,
        }
    }
}
