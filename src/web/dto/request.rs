//! Request DTOs for the Web API.

use serde::Deserialize;

/// User registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address (login identifier).
    pub email: String,
    /// Password (plaintext; hashed before storage).
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Reservation creation request.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    /// Reservation date (`YYYY-MM-DD`).
    pub date: String,
    /// Reservation time (`HH:MM`).
    pub time: String,
    /// Requested service description.
    pub service: String,
}
