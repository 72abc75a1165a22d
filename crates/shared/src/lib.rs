//! Shared types, errors, and configuration for Nirmaan.
//!
//! This crate provides common types used across all other crates:
//! - Authentication request payloads
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
