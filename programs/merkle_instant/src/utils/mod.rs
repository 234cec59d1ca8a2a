pub mod accounts;
pub mod constants;
pub mod errors;
pub mod events;
pub mod merkle;
pub mod pda;
pub mod validations;
