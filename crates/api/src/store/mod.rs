//! Data access layer: dataset loading and the in-memory stores.
//!
//! The server owns no database. Three JSON files are parsed once at
//! startup into a [`Dataset`]; the catalog stays immutable while carts
//! and sessions live behind locks in [`UserStore`] and
//! [`SessionRegistry`].

pub mod catalog;
pub mod sessions;
pub mod users;

pub use catalog::Catalog;
pub use sessions::SessionRegistry;
pub use users::UserStore;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Brand, Product, User};

const USERS_FILE: &str = "users.json";
const BRANDS_FILE: &str = "brands.json";
const PRODUCTS_FILE: &str = "products.json";

/// Errors from the data access layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A dataset file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file could not be parsed.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A lock was poisoned by a panicking thread.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// An operation referenced a user missing from the store.
    ///
    /// Sessions are only ever created for users in the store, so hitting
    /// this means the store and the session registry disagree.
    #[error("unknown user: {0}")]
    UnknownUser(String),
}

/// The three seed collections the API serves.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: Vec<User>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

impl Dataset {
    /// Load the dataset from a directory of JSON files.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three files is missing or malformed.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            users: load_json(&dir.join(USERS_FILE))?,
            brands: load_json(&dir.join(BRANDS_FILE))?,
            products: load_json(&dir.join(PRODUCTS_FILE))?,
        })
    }
}

/// Read and parse a single JSON file.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_owned(),
        source,
    })
}
