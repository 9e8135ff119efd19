//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::{Catalog, Dataset, SessionRegistry, UserStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog, the user store and the session registry.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    catalog: Catalog,
    users: UserStore,
    sessions: SessionRegistry,
}

impl AppState {
    /// Create application state from configuration and a loaded dataset.
    #[must_use]
    pub fn new(config: ApiConfig, dataset: Dataset) -> Self {
        let Dataset {
            users,
            brands,
            products,
        } = dataset;

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::new(brands, products),
                users: UserStore::new(users),
                sessions: SessionRegistry::new(),
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the user store.
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    /// Get a reference to the session registry.
    #[must_use]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.inner.sessions
    }
}
