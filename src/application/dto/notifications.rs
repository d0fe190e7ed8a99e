use crate::domain::post::PostId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    NewPost {
        message: String,
        from: String,
        post_id: PostId,
        preview: String,
        time: DateTime<Utc>,
    },
}

impl NotificationEvent {
    pub fn new_post(
        author: &str,
        post_id: PostId,
        preview: String,
        time: DateTime<Utc>,
    ) -> Self {
        Self::NewPost {
            message: format!("{author} published a new post!"),
            from: author.to_owned(),
            post_id,
            preview,
            time,
        }
    }
}
