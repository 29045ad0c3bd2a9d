//! Request handlers for the Web API.

pub mod auth;
pub mod reservation;

pub use auth::AppState;
