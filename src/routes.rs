//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST    /track`  - Record a referral click (public, CORS-open)
//! - `OPTIONS /track`  - CORS preflight, answered without validation
//! - `GET     /health` - Health check: store connectivity (public)
//!
//! # Middleware
//!
//! - **CORS** - permissive headers on every response
//! - **Tracing** - structured request/response logging
//! - **Rate limiting** - per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{health_handler, preflight_handler, track_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only when the service runs behind a trusted reverse
///   proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let track_routes =
        Router::new().route("/track", post(track_handler).options(preflight_handler));

    let track_routes = if behind_proxy {
        track_routes.layer(rate_limit::proxy_layer())
    } else {
        track_routes.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(track_routes)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
