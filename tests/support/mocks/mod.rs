// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notify;
pub mod security;
pub mod stores;
pub mod time;

pub use notify::{FailingNotifier, RecordingNotifier};
pub use security::{PlainPasswordHasher, TEST_SIGNING_KEY};
pub use stores::{LostRaceCredentialStore, StalledPostRepository};
pub use time::{MockClock, fixed_now};
