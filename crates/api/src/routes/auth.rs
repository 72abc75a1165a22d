//! Authentication routes for signup, signin, signout and session lookup.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::error::error_response;
use crate::middleware::auth::{SESSION_COOKIE, resolve_session};
use nirmaan_core::auth::{hash_password, verify_password};
use nirmaan_db::{
    ProfileRepository, SessionRepository, UserRepository, UserRoleRepository,
    entities::sea_orm_active_enums::UserRole,
};
use nirmaan_shared::AppError;
use nirmaan_shared::auth::{SessionUser, SigninRequest, SigninResponse, SignupRequest};

use crate::extractors::ValidatedJson;

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .route("/auth/signout", post(signout))
        .route("/auth/me", get(me))
}

/// POST `/auth/signup` - Register a new user with a default profile and role.
async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());

    // Reject duplicate emails
    match user_repo.email_exists(&payload.email).await {
        Ok(true) => {
            return error_response(&AppError::Conflict("User already exists".to_string()))
                .into_response();
        }
        Ok(false) => {}
        Err(e) => {
            error!(error = %e, "Database error checking email");
            return error_response(&AppError::Database("Failed to create user".to_string()))
                .into_response();
        }
    }

    // Hash password
    let password_hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return error_response(&AppError::Internal("Failed to create user".to_string()))
                .into_response();
        }
    };

    // Create user
    let user = match user_repo.create(&payload.email, &password_hash).await {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "Failed to create user");
            return error_response(&AppError::Database("Failed to create user".to_string()))
                .into_response();
        }
    };

    // Default profile and role rows; the three inserts are sequential,
    // not a transaction.
    let profile_repo = ProfileRepository::new((*state.db).clone());
    if let Err(e) = profile_repo.create(user.id, None, Some("manual")).await {
        error!(error = %e, user_id = %user.id, "Failed to create default profile");
        return error_response(&AppError::Database("Failed to create user".to_string()))
            .into_response();
    }

    let role_repo = UserRoleRepository::new((*state.db).clone());
    if let Err(e) = role_repo.create(user.id, Some(UserRole::CompanyUser)).await {
        error!(error = %e, user_id = %user.id, "Failed to create default role");
        return error_response(&AppError::Database("Failed to create user".to_string()))
            .into_response();
    }

    info!(user_id = %user.id, email = %user.email, "New user registered");

    (
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    )
        .into_response()
}

/// POST `/auth/signin` - Authenticate and issue a session cookie.
///
/// A successful sign-in deletes the user's previous sessions, so at most
/// one token stays valid per user.
async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<SigninRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());

    // Find user by email
    let user = match user_repo.find_by_email(&payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!(email = %payload.email, "Sign-in attempt for unknown email");
            return error_response(&AppError::Unauthorized("Invalid credentials".to_string()))
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Database error during sign-in");
            return error_response(&AppError::Database("Failed to sign in".to_string()))
                .into_response();
        }
    };

    // Verify password
    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed sign-in attempt - invalid password");
            return error_response(&AppError::Unauthorized("Invalid credentials".to_string()))
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return error_response(&AppError::Internal("Failed to sign in".to_string()))
                .into_response();
        }
    }

    let session_repo = SessionRepository::new((*state.db).clone());

    // One live session per user: drop the previous ones first
    if let Err(e) = session_repo.delete_for_user(user.id).await {
        error!(error = %e, user_id = %user.id, "Failed to clear previous sessions");
        return error_response(&AppError::Database("Failed to sign in".to_string()))
            .into_response();
    }

    let token = SessionRepository::generate_token();
    let expiry_days = state.config.session.expiry_days;
    let expires_at = Utc::now() + Duration::days(expiry_days);

    if let Err(e) = session_repo.create(user.id, &token, expires_at).await {
        error!(error = %e, user_id = %user.id, "Failed to create session");
        return error_response(&AppError::Database("Failed to sign in".to_string()))
            .into_response();
    }

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(state.config.session.secure_cookies)
        .max_age(time::Duration::days(expiry_days));
    let jar = jar.add(cookie);

    info!(user_id = %user.id, "User signed in");

    let response = SigninResponse {
        user: SessionUser {
            id: user.id,
            email: user.email,
        },
        message: "Logged in successfully".to_string(),
    };

    (StatusCode::OK, jar, Json(response)).into_response()
}

/// POST `/auth/signout` - Revoke the cookie's session.
///
/// Idempotent: a missing or already-dead session still signs the client
/// out and clears the cookie.
async fn signout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let session_repo = SessionRepository::new((*state.db).clone());
        match session_repo.delete_by_token(cookie.value()).await {
            Ok(true) => info!("Session revoked at sign-out"),
            Ok(false) => {}
            Err(e) => {
                error!(error = %e, "Failed to delete session");
                return error_response(&AppError::Database("Failed to sign out".to_string()))
                    .into_response();
            }
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    (
        StatusCode::OK,
        jar,
        Json(json!({ "message": "Logged out successfully" })),
    )
        .into_response()
}

/// GET `/auth/me` - Resolve the session cookie to the current user.
///
/// The response carries the user's effective role (defaulting to
/// `company_user` when no assignment exists) and their profile or null.
async fn me(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let session = match resolve_session(&state.db, &jar).await {
        Ok(session) => session,
        Err(rejection) => return rejection.into_response_with(jar),
    };

    let user_repo = UserRepository::new((*state.db).clone());
    let user = match user_repo.find_by_id(session.user_id).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            // Session outlived its user row
            return error_response(&AppError::Unauthorized("User not found".to_string()))
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Database error loading user");
            return error_response(&AppError::Database("Failed to load session".to_string()))
                .into_response();
        }
    };

    let role_repo = UserRoleRepository::new((*state.db).clone());
    let role = match role_repo.find_by_user(user.id).await {
        Ok(assignment) => assignment.map_or(UserRole::CompanyUser, |a| a.role),
        Err(e) => {
            error!(error = %e, "Database error loading role");
            return error_response(&AppError::Database("Failed to load session".to_string()))
                .into_response();
        }
    };

    let profile_repo = ProfileRepository::new((*state.db).clone());
    let profile = match profile_repo.find_by_user(user.id).await {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "Database error loading profile");
            return error_response(&AppError::Database("Failed to load session".to_string()))
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "user": {
                "id": user.id,
                "email": user.email,
                "role": role,
                "profile": profile
            }
        })),
    )
        .into_response()
}
