//! Authentication extractor for token-guarded routes.
//!
//! Login tokens travel in a custom header rather than `Authorization`,
//! matching what the shop's web client sends.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::models::Session;
use crate::state::AppState;

/// Header carrying the login token issued by `POST /api/login`.
pub const AUTH_HEADER: &str = "X-Authentication";

/// Extractor that reads the raw login token from the request headers.
///
/// Extraction itself never fails; handlers pass the token to
/// [`require_session`] so that each endpoint keeps its own rejection
/// message.
///
/// # Example
///
/// ```rust,ignore
/// async fn cart_handler(
///     State(state): State<AppState>,
///     AuthToken(token): AuthToken,
/// ) -> Result<Json<Vec<Product>>> {
///     let session = require_session(&state, token.as_deref(), "Login required to view cart")?;
///     // ...
/// }
/// ```
pub struct AuthToken(pub Option<String>);

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        Ok(Self(token))
    }
}

/// Resolve a token to a live session, or reject with `message`.
///
/// Absent, unknown and expired tokens all produce the same rejection so
/// callers cannot probe which tokens exist.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` carrying `message` if the token does
/// not resolve to a live session.
pub fn require_session(
    state: &AppState,
    token: Option<&str>,
    message: &str,
) -> Result<Session, ApiError> {
    let session = match token {
        Some(token) => state.sessions().validate(token)?,
        None => None,
    };

    session.ok_or_else(|| ApiError::Unauthorized(message.to_string()))
}
