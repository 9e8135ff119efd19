//! User account types loaded from the seed dataset.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};

use sunglasses_core::Email;

use super::Product;

/// A user account from the seed dataset.
///
/// Accounts are never created or deleted at runtime; only the cart
/// changes. Users are identified by email everywhere past login.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub name: UserName,
    pub email: Email,
    pub login: Login,
    /// The user's cart. Seed data ships this empty.
    #[serde(default)]
    pub cart: Vec<Product>,
}

/// A user's structured name, echoed back in the login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Login credentials for an account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Deserialize)]
pub struct Login {
    pub username: String,
    #[serde(deserialize_with = "secret_string")]
    pub password: SecretString,
}

impl Login {
    /// Compare submitted credentials against this account.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Deserialize a plain string field into a `SecretString`.
fn secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}
