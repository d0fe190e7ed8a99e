// src/application/ports/notification.rs
use crate::application::{ApplicationResult, dto::NotificationEvent};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient: UserId, event: NotificationEvent) -> ApplicationResult<()>;
}
