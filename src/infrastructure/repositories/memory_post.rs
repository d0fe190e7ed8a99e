// src/infrastructure/repositories/memory_post.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::{NewPost, Post, PostId, PostRepository, PostUpdate};
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let post = post.into_post(PostId::generate());
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .await
            .values()
            .filter(|post| post.is_owned_by(author_id))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update_owned(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts
            .get_mut(&update.id)
            .filter(|post| post.is_owned_by(update.author_id))
        else {
            return Ok(None);
        };

        post.set_content(update.content, update.updated_at);
        Ok(Some(post.clone()))
    }

    async fn delete_owned(&self, id: PostId, author_id: UserId) -> DomainResult<bool> {
        let mut posts = self.posts.write().await;
        let owned = posts.get(&id).is_some_and(|post| post.is_owned_by(author_id));
        if owned {
            posts.remove(&id);
        }
        Ok(owned)
    }
}
