// tests/support/mocks/security.rs
use async_trait::async_trait;
use chatme_core::application::{ApplicationResult, ports::security::PasswordHasher};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_SIGNING_KEY: &[u8] = b"test-signing-key-0123456789abcdef";

/// Deterministic stand-in for argon2: `hash::<password>`. Counts
/// verifications so tests can see that unknown users are still checked.
#[derive(Default)]
pub struct PlainPasswordHasher {
    verifications: AtomicUsize,
}

impl PlainPasswordHasher {
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        Ok(expected_hash
            .strip_prefix("hash::")
            .is_some_and(|stored| stored == password))
    }
}
