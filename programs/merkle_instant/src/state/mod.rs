pub mod campaign;
pub mod claim_receipt;
pub mod treasury;
