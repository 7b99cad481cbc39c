//! Handlers for referral click tracking.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
};
use tracing::warn;
use validator::Validate;

use crate::api::dto::track::{TrackRequest, TrackResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Records one referral click.
///
/// # Endpoint
///
/// `POST /track`
///
/// # Request Flow
///
/// 1. Parse the JSON body (`code`, `app_id`)
/// 2. Reject missing or empty fields, then over-length fields
/// 3. Verify the referral code exists
/// 4. Fingerprint the caller from `X-Forwarded-For`
/// 5. Insert one `referral_clicks` row
///
/// Validation failures are reported before any store call is made; the
/// first failing step wins.
///
/// # Errors
///
/// - `400` when `code`/`app_id` are missing, empty, or over-length
/// - `404` when the referral code is unknown
/// - `500` when the insert fails or the body is unparseable
pub async fn track_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TrackRequest>, JsonRejection>,
) -> Result<Json<TrackResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "unparseable track request body");
        AppError::Unhandled
    })?;

    let (code, app_id) = match (request.code.as_deref(), request.app_id.as_deref()) {
        (Some(code), Some(app_id)) if !code.is_empty() && !app_id.is_empty() => (code, app_id),
        _ => return Err(AppError::bad_request("Missing code or app_id")),
    };

    if request.validate().is_err() {
        return Err(AppError::bad_request("Invalid parameters"));
    }

    let forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok());
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    state
        .tracking_service
        .track_click(code, app_id, forwarded_for, user_agent)
        .await?;

    Ok(Json(TrackResponse { success: true }))
}

/// Answers CORS preflight for the tracking endpoint.
///
/// # Endpoint
///
/// `OPTIONS /track`
///
/// Returns immediately with an empty body; the CORS layer attaches the
/// permissive headers. Preflight never reaches validation or persistence.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}
