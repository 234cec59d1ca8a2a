use anchor_lang::prelude::*;

use crate::utils::{
    constants::campaign::{CAMPAIGN_IPFS_CID_SIZE, CAMPAIGN_NAME_SIZE, CLAWBACK_GRACE_PERIOD},
    errors::ErrorCode,
    merkle::{compute_leaf, verify_proof},
};

/// Validate the claim of a campaign.
#[allow(clippy::too_many_arguments)]
pub fn check_claim(
    expiration_time: i64,
    now: i64,
    index: u32,
    recipient: &Pubkey,
    amount: u64,
    merkle_proof: &[[u8; 32]],
    merkle_root: &[u8; 32],
) -> Result<()> {
    // Check: the campaign has not expired.
    if has_expired(expiration_time, now) {
        return Err(ErrorCode::CampaignExpired.into());
    }

    // Check: the Merkle proof is valid.
    if !verify_proof(compute_leaf(index, recipient, amount), merkle_proof, merkle_root) {
        return Err(ErrorCode::InvalidMerkleProof.into());
    }

    Ok(())
}

/// Validate the clawback from a campaign.
pub fn check_clawback(expiration_time: i64, first_claim_time: i64, now: i64) -> Result<()> {
    // Check: the grace period has not passed or the campaign has expired.
    if has_grace_period_passed(first_claim_time, now) && !has_expired(expiration_time, now) {
        return Err(ErrorCode::ClawbackNotAllowed.into());
    }

    Ok(())
}

/// Validate the collection of fees.
pub fn check_collect_fees(collectible_amount: u64) -> Result<()> {
    // Check: the collectable amount is not zero.
    if collectible_amount == 0 {
        return Err(ErrorCode::CantCollectZeroFees.into());
    }

    Ok(())
}

/// Validate the creation of a campaign.
pub fn check_create_campaign(name: &str, ipfs_cid: &str) -> Result<()> {
    // Check: the name fits in a PDA seed.
    if name.len() > CAMPAIGN_NAME_SIZE {
        return Err(ErrorCode::CampaignNameTooLong.into());
    }

    // Check: the IPFS CID fits in a PDA seed.
    if ipfs_cid.len() > CAMPAIGN_IPFS_CID_SIZE {
        return Err(ErrorCode::CampaignIpfsCidTooLong.into());
    }

    Ok(())
}

/// Helper function to return whether a campaign has expired. A zero expiration time means it never expires.
pub fn has_expired(expiration_time: i64, now: i64) -> bool {
    expiration_time > 0 && now >= expiration_time
}

/// Helper function to return whether the grace period of a campaign has passed.
pub fn has_grace_period_passed(first_claim_time: i64, now: i64) -> bool {
    first_claim_time > 0 && now > first_claim_time.saturating_add(CLAWBACK_GRACE_PERIOD)
}
