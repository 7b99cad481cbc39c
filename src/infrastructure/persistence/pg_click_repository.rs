//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

use crate::domain::entities::{NewReferralClick, ReferralClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for the append-only `referral_clicks` table.
///
/// Uses bound parameters for SQL injection protection. Insert errors are
/// logged here with full detail and mapped to the generic store-write
/// failure so nothing leaks to the caller.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert(&self, new_click: NewReferralClick) -> Result<ReferralClick, AppError> {
        sqlx::query_as::<_, ReferralClick>(
            r#"
            INSERT INTO referral_clicks (referral_code, app_id, ip_hash, user_agent)
            VALUES ($1, $2, $3, $4)
            RETURNING id, referral_code, app_id, ip_hash, user_agent, clicked_at
            "#,
        )
        .bind(&new_click.referral_code)
        .bind(&new_click.app_id)
        .bind(&new_click.ip_hash)
        .bind(new_click.user_agent.as_deref())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "click insert failed");
            AppError::StoreWrite
        })
    }
}
