//! HTTP route handlers for the sunglasses API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check
//!
//! # Auth
//! POST /api/login                  - Exchange credentials for a login token
//!
//! # Catalog
//! GET  /api/sunglasses/brands      - Products for one brand (?brand=)
//! GET  /api/sunglasses/search      - Keyword product search (?search=)
//!
//! # Cart (requires X-Authentication)
//! GET    /api/me/cart              - Current user's cart
//! POST   /api/me/cart/{item_id}    - Add a product to the cart
//! DELETE /api/me/cart/{item_id}    - Remove a product from the cart
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/brands", get(catalog::brands))
        .route("/search", get(catalog::search))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/{item_id}", post(cart::add).delete(cart::remove))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Auth
        .route("/api/login", post(auth::login))
        // Catalog routes
        .nest("/api/sunglasses", catalog_routes())
        // Cart routes
        .nest("/api/me/cart", cart_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
