//! Shared helpers for the API handler tests.
//!
//! Every suite runs the real router against a mocked `sea_orm`
//! connection, so tests exercise routing, extraction and response
//! rendering without a live Postgres.

use std::sync::Arc;

use axum::Router;
use axum::body::to_bytes;
use axum::response::Response;
use sea_orm::DatabaseConnection;

use nirmaan_api::{AppState, create_router};
use nirmaan_shared::AppConfig;
use nirmaan_shared::config::{DatabaseConfig, ServerConfig, SessionConfig};

/// Configuration for handler tests; the URL is never dialled.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://mock".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        session: SessionConfig {
            expiry_days: 30,
            secure_cookies: false,
        },
    }
}

/// Builds the full application router on top of a mocked connection.
pub fn app_with(db: DatabaseConnection) -> Router {
    create_router(AppState {
        db: Arc::new(db),
        config: Arc::new(test_config()),
    })
}

/// Reads the whole response body.
pub async fn extract_body(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body should be readable")
        .to_vec()
}
