//! Session/token auth backed by an in-memory store.
//!
//! Users and sessions live only in process memory; nothing in this service
//! persists, so both vanish on restart. Passwords are hashed
//! with Argon2id; sessions are opaque bearer tokens checked by the
//! `CurrentUser` extractor on every feature route.

pub mod handlers;
pub mod password;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
struct StoreInner {
    /// Keyed by lowercased email.
    users: HashMap<String, UserRecord>,
    /// Keyed by bearer token.
    sessions: HashMap<String, Session>,
}

/// In-memory user registry and session table.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl SessionStore {
    /// Registers a new user. Fails on duplicate email, malformed email,
    /// or a password below the minimum length.
    pub fn signup(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<UserRecord, AppError> {
        let email = normalize_email(email)?;
        if display_name.trim().is_empty() {
            return Err(AppError::Validation(
                "display_name cannot be empty".to_string(),
            ));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }

        let password_hash = password::hash_password(password)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))?;

        let mut inner = self.inner.write().expect("session store lock poisoned");
        if inner.users.contains_key(&email) {
            return Err(AppError::Validation(
                "an account with this email already exists".to_string(),
            ));
        }

        let user = UserRecord {
            id: Uuid::new_v4(),
            email: email.clone(),
            display_name: display_name.trim().to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        inner.users.insert(email, user.clone());
        Ok(user)
    }

    /// Verifies credentials and issues a fresh bearer-token session.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let email = normalize_email(email)?;

        let mut inner = self.inner.write().expect("session store lock poisoned");
        let user = inner.users.get(&email).ok_or(AppError::Unauthorized)?;

        let verified = password::verify_password(password, &user.password_hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password verification failed: {e}")))?;
        if !verified {
            return Err(AppError::Unauthorized);
        }

        let session = Session {
            token: Uuid::new_v4().to_string(),
            user_id: user.id,
            email: user.email.clone(),
            created_at: Utc::now(),
        };
        inner
            .sessions
            .insert(session.token.clone(), session.clone());
        Ok(session)
    }

    /// Drops the session for `token`. Returns whether a session existed.
    pub fn logout(&self, token: &str) -> bool {
        let mut inner = self.inner.write().expect("session store lock poisoned");
        inner.sessions.remove(token).is_some()
    }

    pub fn session(&self, token: &str) -> Option<Session> {
        let inner = self.inner.read().expect("session store lock poisoned");
        inner.sessions.get(token).cloned()
    }
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(
            "email must be a valid address".to_string(),
        ));
    }
    Ok(email)
}

/// Authenticated user extracted from an `Authorization: Bearer <token>` header.
///
/// Use as an extractor parameter in any handler that requires a login.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let session = state.sessions.session(token).ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser {
            user_id: session.user_id,
            email: session.email,
        })
    }
}
