// src/infrastructure/notification.rs
use crate::application::{
    ApplicationResult, dto::NotificationEvent, ports::notification::Notifier,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{RwLock, mpsc};
use tracing::debug;

/// Per-user delivery channels for live notifications.
///
/// A user has at most one live subscription; subscribing again replaces the
/// previous channel. Notifying a user with no subscription drops the event.
#[derive(Default)]
pub struct NotificationHub {
    channels: RwLock<HashMap<UserId, mpsc::UnboundedSender<NotificationEvent>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn subscribe(&self, user_id: UserId) -> mpsc::UnboundedReceiver<NotificationEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.channels.write().await.insert(user_id, tx);
        rx
    }

    pub async fn unsubscribe(&self, user_id: UserId) {
        self.channels.write().await.remove(&user_id);
    }

    pub async fn is_subscribed(&self, user_id: UserId) -> bool {
        self.channels
            .read()
            .await
            .get(&user_id)
            .is_some_and(|tx| !tx.is_closed())
    }

    /// Removes the user's channel only if it is still closed once the write
    /// lock is held, so a subscription made in the meantime survives.
    async fn prune_closed(&self, user_id: UserId) {
        let mut channels = self.channels.write().await;
        if channels.get(&user_id).is_some_and(mpsc::UnboundedSender::is_closed) {
            channels.remove(&user_id);
        }
    }
}

#[async_trait]
impl Notifier for NotificationHub {
    async fn notify(&self, recipient: UserId, event: NotificationEvent) -> ApplicationResult<()> {
        let delivered = match self.channels.read().await.get(&recipient) {
            Some(tx) => tx.send(event).is_ok(),
            None => {
                debug!(recipient = %recipient, "no live subscription, dropping notification");
                return Ok(());
            }
        };

        if !delivered {
            // Receiver went away without unsubscribing.
            self.prune_closed(recipient).await;
            debug!(recipient = %recipient, "subscription closed, dropping notification");
        }
        Ok(())
    }
}
