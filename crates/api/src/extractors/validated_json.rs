//! Validated JSON extractor.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::error_response;
use nirmaan_shared::AppError;

/// JSON extractor that deserializes and validates the payload.
///
/// Rejections surface as `400 {"error": message}` carrying the first
/// validation message, the same shape the handlers use.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| error_response(&AppError::Validation(e.body_text())))?;

        // Validate
        value.validate().map_err(|e| {
            // Get first validation error message
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map_or_else(|| "Validation failed".to_string(), ToString::to_string);
            error_response(&AppError::Validation(message))
        })?;

        Ok(Self(value))
    }
}
