use std::sync::Arc;

use crate::{
    application::ports::{notification::Notifier, time::Clock},
    domain::{post::PostRepository, social::FriendDirectory, user::CredentialStore},
};

pub struct PostCommandService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) credential_store: Arc<dyn CredentialStore>,
    pub(super) friend_directory: Arc<dyn FriendDirectory>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        credential_store: Arc<dyn CredentialStore>,
        friend_directory: Arc<dyn FriendDirectory>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            post_repo,
            credential_store,
            friend_directory,
            notifier,
            clock,
        }
    }
}
