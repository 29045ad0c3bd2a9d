//! Router configuration for the Web API.

use axum::{
    extract::Request,
    middleware::{self, Next},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::auth::JwtState;

use super::handlers::{auth, reservation, AppState};
use super::middleware::{create_cors_layer, jwt_auth};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    // Auth routes (no authentication required)
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    // Reservation routes (bearer token required via the AuthUser extractor)
    let reservation_routes = Router::new()
        .route("/", get(reservation::list).post(reservation::create))
        .route("/:id", delete(reservation::remove));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/reservas", reservation_routes);

    let jwt_state_for_middleware = jwt_state.clone();

    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req: Request, next: Next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Root handler: plain liveness text.
async fn root() -> &'static str {
    "Reservation API running"
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
