pub mod click;
pub mod referral_code;

pub use click::{NewReferralClick, ReferralClick};
pub use referral_code::ReferralCode;
