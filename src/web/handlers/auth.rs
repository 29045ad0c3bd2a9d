//! Authentication handlers.

use axum::{extract::State, Json};
use jsonwebtoken::EncodingKey;
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::{issue_token, Claims};
use crate::config::Config;
use crate::db::{NewUser, User, UserRepository};
use crate::validation::{valid_email, valid_password_length};
use crate::web::dto::{ApiResponse, AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use crate::web::error::ApiError;
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Token validity in seconds.
    pub token_expiry_secs: u64,
    /// Minimum password length for registration.
    pub min_password_length: usize,
    /// Whether booking rules are checked before persisting reservations.
    pub enforce_booking_rules: bool,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(config.auth.jwt_secret.as_bytes()),
            token_expiry_secs: config.auth.token_expiry_secs,
            min_password_length: config.auth.min_password_length,
            enforce_booking_rules: config.booking.enforce_rules,
        }
    }

    /// Issue a session token for a user.
    pub fn issue_session_token(&self, user: &User) -> Result<String, ApiError> {
        let claims = Claims::new(user.id, user.email.clone(), self.token_expiry_secs);
        issue_token(&claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to issue token: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }

    fn auth_response(&self, user: User, token: String) -> AuthResponse {
        AuthResponse {
            token,
            expires_in: self.token_expiry_secs,
            user: UserInfo {
                id: user.id,
                email: user.email,
            },
        }
    }
}

/// POST /api/auth/register - User registration.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let mut failures: HashMap<String, Vec<String>> = HashMap::new();
    if !valid_email(&req.email) {
        failures.insert("email".to_string(), vec!["Invalid email format".to_string()]);
    }
    if !valid_password_length(&req.password, state.min_password_length) {
        failures.insert(
            "password".to_string(),
            vec![format!(
                "Password must be at least {} characters",
                state.min_password_length
            )],
        );
    }
    if !failures.is_empty() {
        return Err(ApiError::validation(failures));
    }

    let password_hash = crate::auth::hash_password(&req.password).map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        ApiError::internal("Failed to hash password")
    })?;

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .create(&NewUser::new(&req.email, password_hash))
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ApiError::conflict("Email already registered")
            } else {
                tracing::error!("User creation failed: {}", e);
                ApiError::from(e)
            }
        })?;

    let token = state.issue_session_token(&user)?;

    Ok(Json(ApiResponse::new(state.auth_response(user, token))))
}

/// POST /api/auth/login - User login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    // Wrong password and unverifiable hash get the same answer
    let password_ok =
        crate::auth::verify_password(&req.password, &user.password).unwrap_or(false);
    if !password_ok {
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = state.issue_session_token(&user)?;

    Ok(Json(ApiResponse::new(state.auth_response(user, token))))
}
