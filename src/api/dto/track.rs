//! DTOs for the click tracking endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /track`.
///
/// Both fields are required by the contract, but are modeled as `Option`
/// so that missing fields and over-length fields map to their distinct
/// error messages instead of a serde rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct TrackRequest {
    /// Referral code being followed (max 20 characters).
    #[validate(length(max = 20))]
    pub code: Option<String>,

    /// Identifier of the application that generated the click (max 50 characters).
    #[validate(length(max = 50))]
    pub app_id: Option<String>,
}

/// Acknowledgment for a recorded click.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub success: bool,
}
