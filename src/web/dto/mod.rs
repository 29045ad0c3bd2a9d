//! Request and response DTOs for the Web API.

mod request;
mod response;

pub use request::{CreateReservationRequest, LoginRequest, RegisterRequest};
pub use response::{ApiResponse, AuthResponse, ReservationData, UserInfo};
