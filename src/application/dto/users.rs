use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of a user. The password hash never leaves the domain layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.to_string(),
            bio: user.bio.map(String::from).unwrap_or_default(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummaryDto {
    pub id: UserId,
    pub username: String,
}

impl From<User> for UserSummaryDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchDto {
    pub query: String,
    pub count: usize,
    pub users: Vec<UserSummaryDto>,
}
