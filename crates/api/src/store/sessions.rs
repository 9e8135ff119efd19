//! In-memory login session registry.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rand::Rng;

use sunglasses_core::Email;

use crate::models::Session;

use super::StoreError;

/// Length of the opaque login token.
const TOKEN_LENGTH: usize = 16;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Live login sessions, keyed by token.
///
/// Each login issues a fresh session; logging in again never touches
/// earlier sessions, so one user can hold several valid tokens at once.
/// Sessions expire on their own, and [`create`](Self::create) sweeps
/// expired entries out so the map does not grow without bound.
///
/// # Note
///
/// Sessions are lost when the process restarts.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionRegistry {
    /// Creates an empty session registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a session for the given account and register it.
    ///
    /// Expired sessions are pruned first, so abandoned logins get
    /// collected the next time anyone logs in.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn create(&self, email: &Email) -> Result<Session, StoreError> {
        self.prune_expired()?;

        let session = Session {
            email: email.clone(),
            token: generate_token(TOKEN_LENGTH),
            created_at: Utc::now(),
        };

        self.sessions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .insert(session.token.clone(), session.clone());

        Ok(session)
    }

    /// Resolve a token to its session, if one exists and has not expired.
    ///
    /// Validation is read-only: it never extends the session's lifetime
    /// and never removes expired entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn validate(&self, token: &str) -> Result<Option<Session>, StoreError> {
        self.validate_at(token, Utc::now())
    }

    /// [`validate`](Self::validate) against an explicit clock, for tests
    /// and callers that already hold a timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn validate_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, StoreError> {
        let sessions = self.sessions.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(sessions
            .get(token)
            .filter(|session| !session.is_expired_at(now))
            .cloned())
    }

    /// Drop all expired sessions, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    #[allow(clippy::significant_drop_tightening)]
    pub fn prune_expired(&self) -> Result<usize, StoreError> {
        let mut sessions = self.sessions.write().map_err(|_| StoreError::LockPoisoned)?;

        let now = Utc::now();
        let before_count = sessions.len();

        sessions.retain(|_, session| !session.is_expired_at(now));

        Ok(before_count.saturating_sub(sessions.len()))
    }

    /// Number of sessions currently registered, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Whether the registry holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register an existing session as-is, bypassing token generation.
    #[cfg(test)]
    fn insert(&self, session: Session) -> Result<(), StoreError> {
        self.sessions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .insert(session.token.clone(), session);
        Ok(())
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random alphanumeric token.
fn generate_token(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            char::from(TOKEN_CHARSET.get(idx).copied().unwrap_or(b'a'))
        })
        .collect()
}
