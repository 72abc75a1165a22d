//! Authentication request and response payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sign-up request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// User email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// User password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-in request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninRequest {
    /// User email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// User password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Minimal user info embedded in the sign-in response.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    /// User ID.
    pub id: uuid::Uuid,
    /// User email.
    pub email: String,
}

/// Sign-in response payload.
#[derive(Debug, Clone, Serialize)]
pub struct SigninResponse {
    /// Authenticated user info.
    pub user: SessionUser,
    /// Success message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", "secret", true)]
    #[case("not-an-email", "secret", false)]
    #[case("user@example.com", "", false)]
    fn test_signup_validation(#[case] email: &str, #[case] password: &str, #[case] valid: bool) {
        let request = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        assert_eq!(request.validate().is_ok(), valid);
    }

    #[test]
    fn test_signin_deserializes() {
        let request: SigninRequest =
            serde_json::from_str(r#"{"email":"user@example.com","password":"secret"}"#)
                .expect("payload should deserialize");
        assert_eq!(request.email, "user@example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_signin_response_shape() {
        let response = SigninResponse {
            user: SessionUser {
                id: uuid::Uuid::nil(),
                email: "user@example.com".to_string(),
            },
            message: "Logged in successfully".to_string(),
        };
        let json = serde_json::to_value(&response).expect("response should serialize");
        assert_eq!(json["user"]["email"], "user@example.com");
        assert_eq!(json["message"], "Logged in successfully");
    }
}
