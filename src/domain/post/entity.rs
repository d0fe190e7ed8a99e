// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostContent, PostId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.author_id == user
    }

    pub fn set_content(&mut self, content: PostContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = Some(now);
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: UserId,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            author_id: self.author_id,
            content: self.content,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

/// Ownership-checked content change: applied only when `author_id` matches
/// the stored author.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub author_id: UserId,
    pub content: PostContent,
    pub updated_at: DateTime<Utc>,
}
