#![allow(ambiguous_glob_reexports)]
pub mod claim;
pub mod clawback;
pub mod collect_fees;
pub mod create_campaign;
pub mod initialize;
pub mod view;

pub use claim::*;
pub use clawback::*;
pub use collect_fees::*;
pub use create_campaign::*;
pub use initialize::*;
pub use view::*;
