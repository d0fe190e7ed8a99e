// src/infrastructure/repositories/mod.rs
mod bounded;
mod error;
mod memory_post;
mod memory_social;
mod memory_user;
mod postgres_post;
mod postgres_social;
mod postgres_user;

pub use bounded::{BoundedCredentialStore, BoundedFriendDirectory, BoundedPostRepository};
pub use error::map_sqlx;
pub use memory_post::InMemoryPostRepository;
pub use memory_social::InMemoryFriendDirectory;
pub use memory_user::InMemoryCredentialStore;
pub use postgres_post::PostgresPostRepository;
pub use postgres_social::PostgresFriendDirectory;
pub use postgres_user::PostgresCredentialStore;
