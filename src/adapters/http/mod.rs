//! HTTP adapters - the deploy controller's web surface.
//!
//! `app_router` assembles the deploy controller routes behind the bearer
//! token middleware, plus an unauthenticated health check.

pub mod cloudfoundry;
pub mod middleware;

use axum::{http::HeaderValue, response::IntoResponse, routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

pub use cloudfoundry::{cloudfoundry_router, CloudFoundryHandlers};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

/// Full application router.
pub fn app_router(handlers: CloudFoundryHandlers, auth: AuthState) -> Router {
    let protected = cloudfoundry_router(handlers)
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected)
}

/// CORS policy for the configured origins. No origins means same-origin only,
/// except in development where any origin is allowed.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    } else if config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy"
    }))
}
