// src/application/services/mod.rs
mod session;

use std::sync::Arc;

pub use session::{SESSION_INVALID, SESSION_MISSING, SessionCheck};

use crate::{
    application::{
        ApplicationResult,
        commands::{posts::PostCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            notification::Notifier,
            security::{PasswordHasher, TokenService},
            time::Clock,
        },
        queries::{posts::PostQueryService, users::UserQueryService},
    },
    domain::{post::PostRepository, social::FriendDirectory, user::CredentialStore},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    token_service: Arc<dyn TokenService>,
}

impl ApplicationServices {
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        post_repo: Arc<dyn PostRepository>,
        friend_directory: Arc<dyn FriendDirectory>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&credential_store),
            Arc::clone(&password_hasher),
            Arc::clone(&token_service),
            Arc::clone(&clock),
        ));

        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&credential_store),
            Arc::clone(&token_service),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            Arc::clone(&credential_store),
            Arc::clone(&friend_directory),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_repo),
            Arc::clone(&credential_store),
        ));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            token_service,
        }
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        Arc::clone(&self.token_service)
    }

    pub fn inspect_session(&self, token: Option<&str>) -> SessionCheck {
        SessionCheck::resolve(self.token_service.as_ref(), token)
    }

    /// Gate for identity-requiring operations. Presentation-layer middleware
    /// delegates here instead of verifying tokens itself.
    pub fn authenticate_session(&self, token: Option<&str>) -> ApplicationResult<AuthenticatedUser> {
        self.inspect_session(token).into_result()
    }
}
