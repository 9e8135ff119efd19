//! CLI command implementations.

pub mod check_data;
