//! Location reference data routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use crate::error::error_response;
use nirmaan_db::LocationRepository;
use nirmaan_shared::AppError;

/// Creates the location reference routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/states/{country_id}", get(list_states))
        .route("/cities/{state_id}", get(list_cities))
}

/// GET `/countries` - List all countries.
async fn list_countries(State(state): State<AppState>) -> impl IntoResponse {
    let repo = LocationRepository::new((*state.db).clone());

    match repo.countries().await {
        Ok(countries) => (StatusCode::OK, Json(countries)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list countries");
            error_response(&AppError::Database("Failed to fetch countries".to_string()))
                .into_response()
        }
    }
}

/// GET `/states/{country_id}` - List the states of a country.
///
/// An unknown country id is not an error; it simply has no states.
async fn list_states(
    State(state): State<AppState>,
    Path(country_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = LocationRepository::new((*state.db).clone());

    match repo.states_by_country(country_id).await {
        Ok(states) => (StatusCode::OK, Json(states)).into_response(),
        Err(e) => {
            error!(error = %e, %country_id, "Failed to list states");
            error_response(&AppError::Database("Failed to fetch states".to_string()))
                .into_response()
        }
    }
}

/// GET `/cities/{state_id}` - List the cities of a state.
async fn list_cities(
    State(state): State<AppState>,
    Path(state_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = LocationRepository::new((*state.db).clone());

    match repo.cities_by_state(state_id).await {
        Ok(cities) => (StatusCode::OK, Json(cities)).into_response(),
        Err(e) => {
            error!(error = %e, %state_id, "Failed to list cities");
            error_response(&AppError::Database("Failed to fetch cities".to_string()))
                .into_response()
        }
    }
}
