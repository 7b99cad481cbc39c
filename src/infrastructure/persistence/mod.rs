pub mod pg_click_repository;
pub mod pg_referral_code_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_referral_code_repository::PgReferralCodeRepository;
