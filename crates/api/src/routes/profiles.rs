//! Profile routes linking users to companies.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use sea_orm::SqlErr;
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use crate::error::error_response;
use crate::extractors::ValidatedJson;
use nirmaan_db::{ProfileRepository, UpdateProfileInput};
use nirmaan_shared::AppError;

/// Creates the profile routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", post(create_profile))
        .route("/profile/{user_id}", get(get_profile).patch(update_profile))
}

/// Request body for creating a profile.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    /// Owning user.
    pub user_id: Uuid,
    /// Company the user belongs to.
    pub company_id: Option<Uuid>,
    /// How the account was provisioned.
    #[validate(length(min = 1, message = "Login type is required"))]
    pub login_type: Option<String>,
}

/// Request body for partially updating a profile.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Company the user belongs to.
    pub company_id: Option<Uuid>,
    /// How the account was provisioned.
    #[validate(length(min = 1, message = "Login type is required"))]
    pub login_type: Option<String>,
}

/// GET `/profile/{user_id}` - Fetch the profile of a user.
///
/// Returns a JSON `null` body when the user has no profile, matching the
/// client's "not onboarded yet" check.
async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ProfileRepository::new((*state.db).clone());

    match repo.find_by_user(user_id).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => {
            error!(error = %e, %user_id, "Failed to fetch profile");
            error_response(&AppError::Database("Failed to fetch profile".to_string()))
                .into_response()
        }
    }
}

/// POST `/profile` - Create a profile for a user.
async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProfileRequest>,
) -> impl IntoResponse {
    let repo = ProfileRepository::new((*state.db).clone());

    match repo
        .create(
            payload.user_id,
            payload.company_id,
            payload.login_type.as_deref(),
        )
        .await
    {
        Ok(profile) => {
            info!(user_id = %profile.user_id, "Profile created");
            (StatusCode::CREATED, Json(profile)).into_response()
        }
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                error_response(&AppError::Conflict("Profile already exists".to_string()))
                    .into_response()
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                error_response(&AppError::Validation("Unknown user or company".to_string()))
                    .into_response()
            }
            _ => {
                error!(error = %e, user_id = %payload.user_id, "Failed to create profile");
                error_response(&AppError::Database("Failed to create profile".to_string()))
                    .into_response()
            }
        },
    }
}

/// PATCH `/profile/{user_id}` - Partially update the profile of a user.
async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> impl IntoResponse {
    let repo = ProfileRepository::new((*state.db).clone());

    let input = UpdateProfileInput {
        company_id: payload.company_id.map(Some),
        login_type: payload.login_type,
    };

    match repo.update_by_user(user_id, input).await {
        Ok(Some(profile)) => {
            info!(%user_id, "Profile updated");
            (StatusCode::OK, Json(profile)).into_response()
        }
        Ok(None) => error_response(&AppError::NotFound("Profile not found".to_string()))
            .into_response(),
        Err(e) => match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                error_response(&AppError::Validation("Unknown company".to_string()))
                    .into_response()
            }
            _ => {
                error!(error = %e, %user_id, "Failed to update profile");
                error_response(&AppError::Database("Failed to update profile".to_string()))
                    .into_response()
            }
        },
    }
}
