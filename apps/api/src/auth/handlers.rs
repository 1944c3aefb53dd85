//! Axum route handlers for signup, login, logout, and session introspection.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub logged_out: bool,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: Uuid,
    pub email: String,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    let user = state
        .sessions
        .signup(&request.email, &request.display_name, &request.password)?;

    Ok(Json(SignupResponse {
        user_id: user.id,
        email: user.email,
        display_name: user.display_name,
        created_at: user.created_at,
    }))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let session = state.sessions.login(&request.email, &request.password)?;

    Ok(Json(LoginResponse {
        token: session.token,
        user_id: session.user_id,
        email: session.email,
        logged_in_at: session.created_at,
    }))
}

/// POST /api/v1/auth/logout
///
/// Accepts the same bearer header the feature routes use; logging out an
/// already-dead token reports `logged_out: false` rather than an error.
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, AppError> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(LogoutResponse {
        logged_out: state.sessions.logout(token),
    }))
}

/// GET /api/v1/auth/me
pub async fn handle_me(user: CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: user.user_id,
        email: user.email,
    })
}
