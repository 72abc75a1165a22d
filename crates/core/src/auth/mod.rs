//! Authentication primitives.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification

mod password;

pub use password::{PasswordError, hash_password, verify_password};
