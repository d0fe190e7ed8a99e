pub mod auth;
pub mod notifications;
pub mod posts;
pub mod users;

pub use auth::{AuthenticatedUser, SessionStatusDto, SessionTokenDto};
pub use notifications::NotificationEvent;
pub use posts::{PostDto, PostListDto};
pub use users::{UserDto, UserSearchDto, UserSummaryDto};
