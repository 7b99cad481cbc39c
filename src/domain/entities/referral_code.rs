//! Referral code entity.

/// A referral code previously issued to a referring user.
///
/// Codes are opaque short strings created by the issuing system; this
/// service only reads them to verify that incoming clicks reference a
/// known code.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ReferralCode {
    pub code: String,
}
