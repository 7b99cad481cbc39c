//! Referral click tracking service.

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{NewReferralClick, ReferralClick};
use crate::domain::repositories::{ClickRepository, ReferralCodeRepository};
use crate::error::AppError;
use crate::utils::fingerprint::{client_ip, ip_fingerprint};

/// User-Agent values are truncated to this many characters before storage.
pub const MAX_USER_AGENT_LEN: usize = 200;

/// Service recording referral link clicks.
///
/// Control flow is linear and stateless: verify the code exists,
/// fingerprint the caller, insert one click row. Each request performs at
/// most one read and one write against the store, both awaited before
/// responding; there is no background work and no retry inside the service.
pub struct TrackingService {
    codes: Arc<dyn ReferralCodeRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl TrackingService {
    /// Creates a new tracking service over the given repositories.
    pub fn new(codes: Arc<dyn ReferralCodeRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { codes, clicks }
    }

    /// Records one referral click.
    ///
    /// `code` and `app_id` are expected to be present and within length
    /// bounds; the HTTP layer rejects anything else before calling in.
    ///
    /// The caller fingerprint is derived from the first `X-Forwarded-For`
    /// element (or `"unknown"`), salted and hashed so the raw address never
    /// reaches the store. The User-Agent is truncated to
    /// [`MAX_USER_AGENT_LEN`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the referral code is unknown.
    /// Returns [`AppError::StoreWrite`] if the click insert fails.
    /// Returns [`AppError::Unhandled`] on store lookup errors.
    pub async fn track_click(
        &self,
        code: &str,
        app_id: &str,
        forwarded_for: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<ReferralClick, AppError> {
        if self.codes.find_by_code(code).await?.is_none() {
            return Err(AppError::not_found("Invalid referral code"));
        }

        let ip_hash = ip_fingerprint(client_ip(forwarded_for));
        let user_agent = user_agent.map(|ua| ua.chars().take(MAX_USER_AGENT_LEN).collect());

        let click = self
            .clicks
            .insert(NewReferralClick {
                referral_code: code.to_string(),
                app_id: app_id.to_string(),
                ip_hash,
                user_agent,
            })
            .await?;

        debug!(code, app_id, "recorded referral click");

        Ok(click)
    }

    /// Probes store connectivity for the health endpoint.
    pub async fn health_check(&self) -> bool {
        self.codes.health_check().await
    }
}
