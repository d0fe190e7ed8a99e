use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenService},
    time::Clock,
};
use crate::domain::user::CredentialStore;

pub struct UserCommandService {
    pub(super) credential_store: Arc<dyn CredentialStore>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_service: Arc<dyn TokenService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            credential_store,
            password_hasher,
            token_service,
            clock,
        }
    }
}
