//! Login session types.

use chrono::{DateTime, Duration, Utc};

use sunglasses_core::Email;

/// How long a login token stays valid after it is issued, in minutes.
///
/// The lifetime is absolute: validation never extends it, so a token
/// dies exactly this long after the login that produced it.
pub const SESSION_TTL_MINUTES: i64 = 15;

/// A logged-in user's session, identified by an opaque token.
#[derive(Debug, Clone)]
pub struct Session {
    /// The account this session belongs to.
    pub email: Email,
    /// Opaque bearer token presented in the `X-Authentication` header.
    pub token: String,
    /// When the session was created. Never updated.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Whether this session has expired as of `now`.
    ///
    /// A session is expired once its age reaches the TTL, so a check at
    /// exactly fifteen minutes already fails.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.created_at) >= Duration::minutes(SESSION_TTL_MINUTES)
    }
}
