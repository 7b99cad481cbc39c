//! PostgreSQL implementation of the referral code repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

use crate::domain::entities::ReferralCode;
use crate::domain::repositories::ReferralCodeRepository;
use crate::error::AppError;

/// PostgreSQL repository for referral code lookups.
///
/// The `referral_codes` table is owned by the code-issuing system; this
/// service never writes to it.
pub struct PgReferralCodeRepository {
    pool: Arc<PgPool>,
}

impl PgReferralCodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferralCodeRepository for PgReferralCodeRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ReferralCode>, AppError> {
        sqlx::query_as::<_, ReferralCode>(
            r#"
            SELECT code
            FROM referral_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "referral code lookup failed");
            AppError::Unhandled
        })
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
