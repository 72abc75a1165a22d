//! Session authentication middleware for protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;
use tracing::error;

use crate::AppState;
use crate::error::error_response;
use nirmaan_db::{SessionRepository, entities::sessions};
use nirmaan_shared::AppError;

/// Name of the session cookie issued at sign-in.
pub const SESSION_COOKIE: &str = "session_token";

/// Why a request failed session validation.
#[derive(Debug)]
pub enum SessionRejection {
    /// The request carried no session cookie.
    Missing,
    /// The cookie's token matched no live session.
    Expired,
    /// The session lookup itself failed.
    Database(DbErr),
}

impl SessionRejection {
    /// Renders the rejection, clearing the session cookie when the
    /// session went stale.
    #[must_use]
    pub fn into_response_with(self, jar: CookieJar) -> Response {
        match self {
            Self::Missing => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Not authenticated" })),
            )
                .into_response(),
            Self::Expired => {
                let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
                (
                    StatusCode::UNAUTHORIZED,
                    jar,
                    Json(json!({ "error": "Session expired" })),
                )
                    .into_response()
            }
            Self::Database(e) => {
                error!(error = %e, "Database error during session validation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Authentication failed" })),
                )
                    .into_response()
            }
        }
    }
}

/// Resolves the session cookie in `jar` to a live session row.
///
/// A token that matches no live session also sweeps its stale row, so
/// expired sessions disappear on their next use instead of lingering
/// until an operator runs the cleanup.
///
/// # Errors
///
/// Returns a [`SessionRejection`] describing why validation failed.
pub async fn resolve_session(
    db: &DatabaseConnection,
    jar: &CookieJar,
) -> Result<sessions::Model, SessionRejection> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Err(SessionRejection::Missing);
    };
    let token = cookie.value();

    let repo = SessionRepository::new(db.clone());
    match repo.find_valid_by_token(token).await {
        Ok(Some(session)) => Ok(session),
        Ok(None) => {
            if let Err(e) = repo.delete_by_token(token).await {
                error!(error = %e, "Failed to sweep stale session");
            }
            Err(SessionRejection::Expired)
        }
        Err(e) => Err(SessionRejection::Database(e)),
    }
}

/// Session authentication middleware.
///
/// This middleware:
/// 1. Reads the `session_token` cookie
/// 2. Resolves it to a live session in the store
/// 3. Stores the session's user id in request extensions for handlers
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match resolve_session(&state.db, &jar).await {
        Ok(session) => {
            request.extensions_mut().insert(AuthUser(session.user_id));
            next.run(request).await
        }
        Err(rejection) => rejection.into_response_with(jar),
    }
}

/// Extractor for the authenticated user's id.
///
/// Use this in handlers behind [`auth_middleware`]:
///
/// ```ignore
/// async fn handler(user: AuthUser) -> impl IntoResponse {
///     let user_id = user.0;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub uuid::Uuid);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Self>().copied().ok_or_else(|| {
            error_response(&AppError::Unauthorized("Not authenticated".to_string()))
        })
    }
}
