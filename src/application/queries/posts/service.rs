use std::sync::Arc;

use crate::domain::{post::PostRepository, user::CredentialStore};

pub struct PostQueryService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) credential_store: Arc<dyn CredentialStore>,
}

impl PostQueryService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        credential_store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            post_repo,
            credential_store,
        }
    }
}
