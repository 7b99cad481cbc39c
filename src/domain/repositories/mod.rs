pub mod click_repository;
pub mod referral_code_repository;

pub use click_repository::ClickRepository;
pub use referral_code_repository::ReferralCodeRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use referral_code_repository::MockReferralCodeRepository;
