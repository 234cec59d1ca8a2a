pub mod create_with_durations;
pub mod create_with_timestamps;

pub use create_with_timestamps::*;
