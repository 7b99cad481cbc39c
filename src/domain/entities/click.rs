//! Click entities for recorded referral link follows.

use chrono::{DateTime, Utc};

/// A referral click as persisted in the store.
///
/// Append-only: rows are created exactly once per accepted request and
/// never mutated afterward. The caller is identified only by `ip_hash`,
/// a salted, truncated digest; the raw IP address is never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReferralClick {
    pub id: i64,
    pub referral_code: String,
    pub app_id: String,
    pub ip_hash: String,
    pub user_agent: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for recording a new referral click.
///
/// The `referral_code` must reference an existing [`super::ReferralCode`];
/// the timestamp is set by the database on insert.
#[derive(Debug, Clone)]
pub struct NewReferralClick {
    pub referral_code: String,
    pub app_id: String,
    pub ip_hash: String,
    pub user_agent: Option<String>,
}
