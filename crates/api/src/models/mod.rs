//! Domain models for the sunglasses API.

pub mod catalog;
pub mod session;
pub mod user;

pub use catalog::{Brand, Product};
pub use session::{SESSION_TTL_MINUTES, Session};
pub use user::{Login, User, UserName};
