//! Error types for the reservation service.

use thiserror::Error;

/// Common error type for the reservation service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database error.
    ///
    /// Wraps any failure reported by the database backend. Errors from
    /// sqlx are converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Token issuance error.
    #[error("token error: {0}")]
    Token(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// Result type alias for reservation service operations.
pub type Result<T> = std::result::Result<T, AppError>;
