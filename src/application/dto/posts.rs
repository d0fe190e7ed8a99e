use crate::domain::{
    post::{Post, PostId},
    user::UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            content: post.content.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListDto {
    pub count: usize,
    pub posts: Vec<PostDto>,
}

impl From<Vec<Post>> for PostListDto {
    fn from(posts: Vec<Post>) -> Self {
        let posts: Vec<PostDto> = posts.into_iter().map(PostDto::from).collect();
        Self {
            count: posts.len(),
            posts,
        }
    }
}
