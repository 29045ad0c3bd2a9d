//! Reservas - a small reservation service with token-based authentication.
//!
//! The crate exposes a REST API for registering users, logging in, and
//! managing each user's own reservations. Passwords are stored as Argon2id
//! hashes and sessions are carried by signed JWTs.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod validation;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{AppError, Result};
pub use web::WebServer;
