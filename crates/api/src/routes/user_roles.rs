//! User role assignment routes.

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
use nirmaan_db::{UserRoleRepository, entities::sea_orm_active_enums::UserRole};
use nirmaan_shared::AppError;

/// Creates the user role routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user-role", post(create_user_role))
        .route("/user-role/{user_id}", get(get_user_role))
}

/// Request body for assigning a role.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRoleRequest {
    /// User receiving the role.
    pub user_id: Uuid,
    /// Assigned role (defaults to `company_user`).
    pub role: Option<UserRole>,
}

/// GET `/user-role/{user_id}` - Fetch the role assignment of a user.
///
/// Returns a JSON `null` body when no assignment exists; the session
/// endpoint treats that as `company_user`.
async fn get_user_role(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = UserRoleRepository::new((*state.db).clone());

    match repo.find_by_user(user_id).await {
        Ok(assignment) => (StatusCode::OK, Json(assignment)).into_response(),
        Err(e) => {
            error!(error = %e, %user_id, "Failed to fetch user role");
            error_response(&AppError::Database("Failed to fetch user role".to_string()))
                .into_response()
        }
    }
}

/// POST `/user-role` - Assign a role to a user.
async fn create_user_role(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRoleRequest>,
) -> impl IntoResponse {
    let repo = UserRoleRepository::new((*state.db).clone());

    match repo.create(payload.user_id, payload.role).await {
        Ok(assignment) => {
            info!(user_id = %assignment.user_id, role = ?assignment.role, "Role assigned");
            (StatusCode::CREATED, Json(assignment)).into_response()
        }
        Err(e) => match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                error_response(&AppError::Validation("Unknown user".to_string())).into_response()
            }
            _ => {
                error!(error = %e, user_id = %payload.user_id, "Failed to assign role");
                error_response(&AppError::Database("Failed to assign role".to_string()))
                    .into_response()
            }
        },
    }
}
