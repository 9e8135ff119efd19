//! Sunglasses API server - public catalog, login and cart endpoints.
//!
//! This binary serves the JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request and response bodies
//! - Static JSON dataset (users, brands, products) loaded once at startup
//! - In-memory session registry for opaque login tokens
//! - In-memory carts, one per user
//!
//! All runtime state lives in the process. Restarting resets carts and
//! sessions to the seed dataset.

#![cfg_attr(not(test), forbid(unsafe_code))]

use sunglasses_api::config::ApiConfig;
use sunglasses_api::store::Dataset;
use sunglasses_api::{AppState, app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sunglasses_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the JSON dataset
    let dataset = Dataset::load(&config.data_dir).expect("Failed to load dataset");
    tracing::info!(
        users = dataset.users.len(),
        brands = dataset.brands.len(),
        products = dataset.products.len(),
        "Dataset loaded"
    );

    // Build application state and router
    let state = AppState::new(config, dataset);
    let addr = state.config().socket_addr();
    let router = app(state);

    // Start server
    tracing::info!("sunglasses api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
