// src/infrastructure/repositories/postgres_social.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::social::FriendDirectory;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Friendships are stored once per pair; the query reads both directions.
#[derive(Clone)]
pub struct PostgresFriendDirectory {
    pool: PgPool,
}

impl PostgresFriendDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendDirectory for PostgresFriendDirectory {
    async fn friends_of(&self, user_id: UserId) -> DomainResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT friend_id FROM friends WHERE user_id = $1
             UNION
             SELECT user_id FROM friends WHERE friend_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ids.into_iter().map(UserId::from).collect())
    }
}
