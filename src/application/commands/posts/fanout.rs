use std::sync::Arc;

use super::PostCommandService;
use crate::{
    application::{dto::NotificationEvent, ports::notification::Notifier},
    domain::{
        post::Post,
        social::FriendDirectory,
        user::{User, UserId},
    },
};
use tracing::{debug, warn};

pub const PREVIEW_LENGTH: usize = 50;

impl PostCommandService {
    /// Fire-and-forget: the request that created the post never waits on,
    /// or fails because of, notification delivery.
    pub(super) fn dispatch_new_post_notifications(&self, author: &User, post: &Post) {
        let event = NotificationEvent::new_post(
            author.username.as_str(),
            post.id,
            post.content.preview(PREVIEW_LENGTH),
            self.clock.now(),
        );

        tokio::spawn(fan_out(
            Arc::clone(&self.friend_directory),
            Arc::clone(&self.notifier),
            author.id,
            event,
        ));
    }
}

async fn fan_out(
    friends: Arc<dyn FriendDirectory>,
    notifier: Arc<dyn Notifier>,
    author_id: UserId,
    event: NotificationEvent,
) {
    let recipients = match friends.friends_of(author_id).await {
        Ok(recipients) => recipients,
        Err(err) => {
            warn!(author_id = %author_id, error = %err, "could not load friends for notification fan-out");
            return;
        }
    };

    debug!(author_id = %author_id, recipients = recipients.len(), "fanning out new-post notification");

    for recipient in recipients {
        if let Err(err) = notifier.notify(recipient, event.clone()).await {
            warn!(recipient = %recipient, error = %err, "new-post notification failed");
        }
    }
}
