//! Signed session tokens (JWT).

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AppError, Result};

/// JWT claims structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: i64,
    /// Email address.
    pub email: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

impl Claims {
    /// Build claims for a user, valid for `ttl_secs` from now.
    pub fn new(user_id: i64, email: impl Into<String>, ttl_secs: u64) -> Self {
        let now = chrono::Utc::now().timestamp() as u64;
        Self {
            sub: user_id,
            email: email.into(),
            iat: now,
            exp: now + ttl_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// The single failure outcome of token verification.
///
/// Signature mismatch, malformed input, and expiry are deliberately
/// indistinguishable to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid token")]
pub struct InvalidToken;

/// Verification-side state for JWT authentication.
#[derive(Clone)]
pub struct JwtState {
    /// Decoding key for JWT verification.
    pub decoding_key: DecodingKey,
    /// Validation settings.
    pub validation: Validation,
}

impl JwtState {
    /// Create a new JWT state from a secret key.
    pub fn new(secret: &str) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            decoding_key,
            validation,
        }
    }
}

/// Sign claims into a token string.
///
/// Failures here come from the signing primitive itself and are propagated.
pub fn issue_token(claims: &Claims, key: &EncodingKey) -> Result<String> {
    encode(&Header::default(), claims, key).map_err(|e| AppError::Token(e.to_string()))
}

/// Verify a token and return its claims.
///
/// Every decode failure is normalized to [`InvalidToken`]; the cause is
/// logged at debug level only.
pub fn verify_token(token: &str, state: &JwtState) -> std::result::Result<Claims, InvalidToken> {
    decode::<Claims>(token, &state.decoding_key, &state.validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("token verification failed: {}", e);
            InvalidToken
        })
}
