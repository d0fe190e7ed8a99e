use crate::application::error::{ApplicationError, ApplicationResult};

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";
pub const DUPLICATE_USERNAME: &str = "User with this username already exists";

/// Both fields must be present and non-blank. The password is returned
/// verbatim; only the username is trimmed later by `Username::new`.
pub(super) fn require_credentials(
    username: Option<String>,
    password: Option<String>,
) -> ApplicationResult<(String, String)> {
    let username = username.filter(|value| !value.trim().is_empty());
    let password = password.filter(|value| !value.is_empty());

    match (username, password) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(ApplicationError::validation(CREDENTIALS_REQUIRED)),
    }
}

pub(super) fn invalid_credentials() -> ApplicationError {
    ApplicationError::unauthorized(INVALID_CREDENTIALS)
}
