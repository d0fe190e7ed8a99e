use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenService,
};

pub const SESSION_MISSING: &str = "No access. Please log in.";
pub const SESSION_INVALID: &str = "Invalid token";

/// Outcome of inspecting the session credential attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCheck {
    Missing,
    Invalid,
    Valid(AuthenticatedUser),
}

impl SessionCheck {
    pub fn resolve(tokens: &dyn TokenService, token: Option<&str>) -> Self {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::Missing;
        };

        match tokens.verify(token) {
            Ok(user) => Self::Valid(user),
            Err(_) => Self::Invalid,
        }
    }

    /// A missing credential is an authentication failure (401); a credential
    /// that is present but unusable is a malformed request (400).
    pub fn into_result(self) -> ApplicationResult<AuthenticatedUser> {
        match self {
            Self::Valid(user) => Ok(user),
            Self::Missing => Err(ApplicationError::unauthorized(SESSION_MISSING)),
            Self::Invalid => Err(ApplicationError::validation(SESSION_INVALID)),
        }
    }
}
