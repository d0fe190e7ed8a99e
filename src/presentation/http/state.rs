// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "auth_token";

#[derive(Clone, Debug)]
pub struct CookieSettings {
    pub secure: bool,
    pub max_age_secs: i64,
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub cookies: CookieSettings,
}
