use anchor_lang::prelude::*;

/// Marks an index of a campaign as claimed. Its existence is the proof of the claim.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct ClaimReceipt {}
