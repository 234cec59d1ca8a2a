//! PDA helpers for deriving the Merkle Instant program addresses.

use anchor_lang::prelude::*;

use crate::utils::constants::seeds::*;

pub fn find_treasury_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY], &crate::ID)
}

/// Derives the campaign address from its full identity. The name and the IPFS CID must not exceed the maximum seed
/// length.
pub fn find_campaign_address(
    creator: &Pubkey,
    merkle_root: &[u8; 32],
    expiration_time: i64,
    ipfs_cid: &str,
    name: &str,
    airdrop_token_mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CAMPAIGN,
            creator.as_ref(),
            merkle_root.as_ref(),
            expiration_time.to_le_bytes().as_ref(),
            ipfs_cid.as_bytes(),
            name.as_bytes(),
            airdrop_token_mint.as_ref(),
        ],
        &crate::ID,
    )
}

pub fn find_claim_receipt_address(campaign: &Pubkey, index: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CLAIM_RECEIPT, campaign.as_ref(), index.to_le_bytes().as_ref()], &crate::ID)
}
