//! Repository trait for referral click persistence.

use crate::domain::entities::{NewReferralClick, ReferralClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only click audit table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Inserts one click record and returns the persisted row.
    ///
    /// The insert either fully succeeds or the request fails; there is no
    /// partial write to compensate for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreWrite`] when the insert fails.
    async fn insert(&self, new_click: NewReferralClick) -> Result<ReferralClick, AppError>;
}
