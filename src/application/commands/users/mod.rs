mod credentials;
mod login;
mod logout;
mod profile;
mod register;
mod service;

pub use credentials::{CREDENTIALS_REQUIRED, DUPLICATE_USERNAME, INVALID_CREDENTIALS};
pub use login::{DUMMY_PASSWORD_HASH, LoginResult, LoginUserCommand};
pub use profile::UpdateProfileCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
