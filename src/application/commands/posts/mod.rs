mod create;
mod delete;
mod fanout;
mod service;
mod update;

pub use create::CreatePostCommand;
pub use delete::{DeletePostCommand, POST_NOT_FOUND_DELETE};
pub use fanout::PREVIEW_LENGTH;
pub use service::PostCommandService;
pub use update::{POST_NOT_FOUND_UPDATE, UpdatePostCommand};
