//! Repository trait for referral code lookups.

use crate::domain::entities::ReferralCode;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the read-only referral code table.
///
/// Codes are issued by another system; this service only needs an exact
/// match lookup to verify that a click references a known code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReferralCodeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferralCodeRepository: Send + Sync {
    /// Finds a referral code by its exact value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ReferralCode))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unhandled`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ReferralCode>, AppError>;

    /// Cheap connectivity probe used by the health endpoint.
    async fn health_check(&self) -> bool;
}
