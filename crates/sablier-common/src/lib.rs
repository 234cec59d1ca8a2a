//! Shared building blocks of the Sablier programs: the in-process runtime, the token program adapters and the fee
//! collection helpers.

pub mod bank;
pub mod fee_collection;
pub mod token_transfer;

// Export all of the crate symbols
pub use bank::*;
pub use fee_collection::*;
pub use token_transfer::*;
