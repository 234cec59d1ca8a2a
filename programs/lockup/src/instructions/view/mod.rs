pub mod refundable_amount_of;
pub mod status_of;
pub mod stream_exists;
pub mod stream_view;
pub mod streamed_amount_of;
pub mod treasury_view;
pub mod withdrawable_amount_of;
pub mod withdrawal_fee_in_lamports;

pub use stream_view::*;
