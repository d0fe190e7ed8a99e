// tests/support/mocks/notify.rs
use async_trait::async_trait;
use chatme_core::application::{
    ApplicationResult, dto::NotificationEvent, error::ApplicationError,
    ports::notification::Notifier,
};
use chatme_core::domain::user::UserId;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(UserId, NotificationEvent)>>,
}

impl RecordingNotifier {
    pub async fn sent(&self) -> Vec<(UserId, NotificationEvent)> {
        self.sent.lock().await.clone()
    }

    /// Fan-out runs on a detached task; poll until `count` deliveries landed.
    pub async fn wait_for(&self, count: usize) -> Vec<(UserId, NotificationEvent)> {
        for _ in 0..200 {
            let sent = self.sent().await;
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.sent().await
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, recipient: UserId, event: NotificationEvent) -> ApplicationResult<()> {
        self.sent.lock().await.push((recipient, event));
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _recipient: UserId, _event: NotificationEvent) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("delivery channel down"))
    }
}
