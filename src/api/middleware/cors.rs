//! CORS layer for the public tracking endpoint.

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: the endpoint is called from arbitrary origins.
///
/// Applied router-wide so every response — success, validation failure, or
/// store error — carries the headers. Allowed request headers match the
/// clients embedding the tracking call: `authorization, x-client-info,
/// apikey, content-type`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}
