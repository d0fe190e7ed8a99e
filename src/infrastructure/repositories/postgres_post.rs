// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{NewPost, Post, PostContent, PostId, PostRepository, PostUpdate};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const POST_COLUMNS: &str = "id, author_id, content, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    author_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::from(row.id),
            author_id: UserId::from(row.author_id),
            content: PostContent::new(row.content)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (id, author_id, content, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(PostId::generate().as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(post.content.as_str())
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE author_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(author_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn update_owned(&self, update: PostUpdate) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET content = $3, updated_at = $4
             WHERE id = $1 AND author_id = $2
             RETURNING {POST_COLUMNS}"
        ))
        .bind(update.id.as_uuid())
        .bind(update.author_id.as_uuid())
        .bind(update.content.as_str())
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn delete_owned(&self, id: PostId, author_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
            .bind(id.as_uuid())
            .bind(author_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
