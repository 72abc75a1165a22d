//! Wire rendering for application errors.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

use nirmaan_shared::AppError;

/// Renders an [`AppError`] as the canonical `{"error": message}` body.
///
/// The variant prefix added by `Display` stays out of the response; the
/// client sees only the bare message.
#[must_use]
pub fn error_response(err: &AppError) -> (StatusCode, Json<Value>) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.message() })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status_and_body() {
        let (status, Json(body)) =
            error_response(&AppError::Conflict("User already exists".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "User already exists" }));
    }

    #[test]
    fn test_error_response_unauthorized() {
        let (status, Json(body)) =
            error_response(&AppError::Unauthorized("Not authenticated".to_string()));
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Not authenticated" }));
    }
}
