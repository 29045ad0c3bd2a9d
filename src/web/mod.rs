//! Web API module.
//!
//! Composes the authentication middleware with the auth and reservation
//! handlers into an axum router, plus the server wrapper that binds it.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
