//! Response DTOs for the Web API.

use serde::Serialize;

use crate::db::Reservation;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Public user information in responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: i64,
    /// Email address.
    pub email: String,
}

/// Authentication response (register and login).
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Signed session token.
    pub token: String,
    /// Token validity in seconds.
    pub expires_in: u64,
    /// User information.
    pub user: UserInfo,
}

/// Reservation record in responses.
#[derive(Debug, Serialize)]
pub struct ReservationData {
    /// Reservation ID.
    pub id: i64,
    /// Owning user ID.
    pub user_id: i64,
    /// Reservation date.
    pub date: String,
    /// Reservation time.
    pub time: String,
    /// Requested service description.
    pub service: String,
    /// Record creation timestamp.
    pub created_at: String,
}

impl From<Reservation> for ReservationData {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            date: r.date,
            time: r.time,
            service: r.service,
            created_at: r.created_at,
        }
    }
}
