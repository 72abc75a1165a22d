//! Core business logic for Nirmaan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `auth` - Password hashing and verification

pub mod auth;
