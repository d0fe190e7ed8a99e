// src/domain/mod.rs
pub mod errors;
pub mod post;
pub mod social;
pub mod user;
