use std::sync::Arc;

use crate::application::ports::security::TokenService;
use crate::domain::user::CredentialStore;

pub struct UserQueryService {
    pub(super) credential_store: Arc<dyn CredentialStore>,
    pub(super) token_service: Arc<dyn TokenService>,
}

impl UserQueryService {
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }
}
