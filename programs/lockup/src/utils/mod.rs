pub mod accounts;
pub mod constants;
pub mod errors;
pub mod events;
pub mod lockup_math;
pub mod nft;
pub mod pda;
pub mod validations;
