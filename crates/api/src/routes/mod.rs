//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod auth;
pub mod companies;
pub mod health;
pub mod locations;
pub mod profiles;
pub mod user_roles;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::routes())
        .merge(locations::routes())
        .merge(companies::routes())
        .merge(profiles::routes())
        .merge(user_roles::routes())
}
