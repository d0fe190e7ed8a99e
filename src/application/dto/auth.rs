use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Identity resolved from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusDto {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

impl SessionStatusDto {
    pub fn anonymous() -> Self {
        Self {
            logged_in: false,
            user: None,
        }
    }

    pub fn logged_in(user: UserDto) -> Self {
        Self {
            logged_in: true,
            user: Some(user),
        }
    }
}
