// src/infrastructure/repositories/memory_social.rs
use crate::domain::errors::DomainResult;
use crate::domain::social::FriendDirectory;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Symmetric friendship graph held in memory.
#[derive(Default)]
pub struct InMemoryFriendDirectory {
    edges: RwLock<HashMap<UserId, HashSet<UserId>>>,
}

impl InMemoryFriendDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_friendship(&self, a: UserId, b: UserId) {
        if a == b {
            return;
        }
        let mut edges = self.edges.write().await;
        edges.entry(a).or_default().insert(b);
        edges.entry(b).or_default().insert(a);
    }
}

#[async_trait]
impl FriendDirectory for InMemoryFriendDirectory {
    async fn friends_of(&self, user_id: UserId) -> DomainResult<Vec<UserId>> {
        Ok(self
            .edges
            .read()
            .await
            .get(&user_id)
            .map(|friends| friends.iter().copied().collect())
            .unwrap_or_default())
    }
}
