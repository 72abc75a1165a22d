//! Request middleware.

pub mod auth;

pub use auth::{AuthUser, SESSION_COOKIE};
