pub mod campaign_view;
pub mod claim_fee_in_lamports;
pub mod has_claimed;
pub mod has_expired;
pub mod has_grace_period_passed;
pub mod treasury_view;

pub use campaign_view::*;
