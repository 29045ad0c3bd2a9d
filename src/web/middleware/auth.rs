//! Bearer token authentication middleware.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{verify_token, Claims, JwtState};
use crate::web::error::ApiError;

/// Extractor for authenticated users.
///
/// Handlers taking this extractor only run for requests carrying a valid
/// bearer token; the decoded claims are the caller's verified identity.
///
/// Outcomes:
/// - no `Authorization` header (or an empty value) -> 401 "Access denied"
/// - token present but invalid or expired -> 400 "Invalid token"
///
/// A `Bearer ` prefix is stripped when present; a raw token without the
/// prefix is accepted as-is.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(|header| header.strip_prefix("Bearer ").unwrap_or(header))
                .unwrap_or("");

            if token.is_empty() {
                return Err(ApiError::unauthorized("Access denied"));
            }

            // JWT state is injected into extensions by the jwt_auth middleware
            let jwt_state = parts
                .extensions
                .get::<Arc<JwtState>>()
                .ok_or_else(|| ApiError::internal("JWT state not configured"))?;

            let claims = verify_token(token, jwt_state)
                .map_err(|_| ApiError::bad_request("Invalid token"))?;

            Ok(AuthUser(claims))
        })
    }
}

/// Middleware function to inject JWT state into request extensions.
pub async fn jwt_auth(
    jwt_state: Arc<JwtState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(jwt_state);
    next.run(request).await
}
