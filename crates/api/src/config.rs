//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SUNGLASSES_HOST` - Bind address (default: 127.0.0.1)
//! - `SUNGLASSES_PORT` - Listen port (default: 3000; generic `PORT` is used as fallback)
//! - `SUNGLASSES_DATA_DIR` - Directory holding the JSON dataset (default: data)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory containing `users.json`, `brands.json` and `products.json`
    pub data_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SUNGLASSES_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SUNGLASSES_HOST".to_string(), e.to_string())
            })?;
        let port = get_port("SUNGLASSES_PORT")?;
        let data_dir = PathBuf::from(get_env_or_default("SUNGLASSES_DATA_DIR", "data"));

        Ok(Self {
            host,
            port,
            data_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get the listen port with fallback to generic `PORT` (set by most PaaS runtimes).
fn get_port(primary_key: &str) -> Result<u16, ConfigError> {
    // Try primary key first (e.g., SUNGLASSES_PORT)
    let (key, value) = if let Ok(value) = std::env::var(primary_key) {
        (primary_key.to_string(), value)
    } else if let Ok(value) = std::env::var("PORT") {
        ("PORT".to_string(), value)
    } else {
        return Ok(DEFAULT_PORT);
    };

    value
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar(key, e.to_string()))
}
