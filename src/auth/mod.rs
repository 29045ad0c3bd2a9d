//! Credential utilities: password hashing and signed session tokens.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use token::{issue_token, verify_token, Claims, InvalidToken, JwtState};
