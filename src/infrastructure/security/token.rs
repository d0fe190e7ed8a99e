// src/infrastructure/security/token.rs
use super::claims::TokenClaims;
use crate::application::{
    dto::{AuthenticatedUser, SessionTokenDto},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenService, time::Clock},
};
use crate::domain::user::UserId;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration as ChronoDuration;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

pub const MIN_SIGNING_KEY_LEN: usize = 32;

/// Stateless session tokens: `base64url(claims_json).base64url(hmac)`.
///
/// The MAC covers the encoded payload exactly as transmitted, so any
/// re-encoding of the claims invalidates the token.
#[derive(Clone)]
pub struct HmacTokenService {
    key: Arc<[u8]>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl HmacTokenService {
    pub fn new(key: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if key.len() < MIN_SIGNING_KEY_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token signing key must be at least {MIN_SIGNING_KEY_LEN} bytes"
            )));
        }
        if ttl.is_zero() {
            return Err(ApplicationError::infrastructure(
                "token ttl must be positive",
            ));
        }

        Ok(Self {
            key: Arc::from(key),
            ttl,
            clock,
        })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn sign(&self, payload_b64: &str) -> ApplicationResult<String> {
        let mut mac = self.mac()?;
        mac.update(payload_b64.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn decode_verified(&self, token: &str) -> ApplicationResult<TokenClaims> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or(ApplicationError::InvalidToken)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| ApplicationError::InvalidToken)?;

        let mut mac = self.mac()?;
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| ApplicationError::InvalidToken)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| ApplicationError::InvalidToken)?;
        serde_json::from_slice(&payload).map_err(|_| ApplicationError::InvalidToken)
    }
}

impl TokenService for HmacTokenService {
    fn issue(&self, user_id: UserId) -> ApplicationResult<SessionTokenDto> {
        let issued_at = self.clock.now();
        let ttl = ChronoDuration::from_std(self.ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let expires_at = issued_at + ttl;

        let claims = TokenClaims::new(user_id, issued_at, expires_at);
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);
        let signature_b64 = self.sign(&payload_b64)?;

        Ok(SessionTokenDto {
            token: format!("{payload_b64}.{signature_b64}"),
            issued_at,
            expires_at,
            expires_in: ttl.num_seconds(),
        })
    }

    fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claims = self.decode_verified(token.trim())?;
        claims.into_authenticated(self.clock.now())
    }
}
