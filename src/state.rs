use std::sync::Arc;

use crate::application::services::TrackingService;

/// Shared application state injected into all handlers.
///
/// Holds no mutable state of its own; each request is independent and the
/// external store is the sole point of serialization.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
}
