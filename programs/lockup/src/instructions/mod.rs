#![allow(ambiguous_glob_reexports)]
pub mod cancel;
pub mod initialize;
pub mod renounce;
pub mod stream_creation;
pub mod view;
pub mod withdrawals;

pub use cancel::*;
pub use initialize::*;
pub use renounce::*;
pub use stream_creation::*;
pub use view::*;
pub use withdrawals::*;
