//! Request extractors shared by token-guarded routes.

pub mod auth;

pub use auth::{AUTH_HEADER, AuthToken, require_session};
