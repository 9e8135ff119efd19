//! Sunglasses Core - Shared types library.
//!
//! This crate provides common types used across all Sunglasses API components:
//! - `api` - The public HTTP API server
//! - `cli` - Command-line tools for dataset management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no store access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
