// src/infrastructure/repositories/memory_user.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Bio, CredentialStore, NewUser, User, UserId, Username};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    by_id: HashMap<UserId, User>,
    by_username: HashMap<String, UserId>,
}

/// Process-local credential store. Both indexes live behind one lock so that
/// the uniqueness check and the insert happen as a single step.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    tables: RwLock<Tables>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .by_username
            .get(username.as_str())
            .and_then(|id| tables.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.tables.read().await.by_id.get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.write().await;
        if tables.by_username.contains_key(new_user.username.as_str()) {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let user = new_user.into_user(UserId::generate());
        tables
            .by_username
            .insert(user.username.as_str().to_owned(), user.id);
        tables.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_bio(&self, id: UserId, bio: Option<Bio>) -> DomainResult<User> {
        let mut tables = self.tables.write().await;
        let user = tables
            .by_id
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.set_bio(bio);
        Ok(user.clone())
    }

    async fn search_by_username(&self, fragment: &str) -> DomainResult<Vec<User>> {
        let needle = fragment.to_lowercase();
        let mut users: Vec<User> = self
            .tables
            .read()
            .await
            .by_id
            .values()
            .filter(|user| user.username.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(users)
    }
}
