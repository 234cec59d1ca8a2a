pub mod collect_fees;
pub mod withdraw;
pub mod withdraw_max;

pub use collect_fees::*;
pub use withdraw::*;
