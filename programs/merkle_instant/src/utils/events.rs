use anchor_lang::prelude::*;

#[event]
pub struct Claim {
    pub amount: u64,
    pub campaign: Pubkey,
    pub claim_receipt: Pubkey,
    pub claimer: Pubkey,
    pub fee_in_lamports: u64,
    pub index: u32,
    pub recipient: Pubkey,
}

#[event]
pub struct Clawback {
    pub amount: u64,
    pub campaign: Pubkey,
    pub campaign_creator: Pubkey,
}

#[event]
pub struct CreateCampaign {
    pub aggregate_amount: u64,
    pub airdrop_token_decimals: u8,
    pub airdrop_token_mint: Pubkey,
    pub campaign: Pubkey,
    pub campaign_name: String,
    pub creator: Pubkey,
    pub expiration_time: i64,
    pub ipfs_cid: String,
    pub merkle_root: [u8; 32],
    pub recipient_count: u32,
}

#[event]
pub struct FeesCollected {
    pub fee_amount: u64,
    pub fee_collector: Pubkey,
    pub fee_recipient: Pubkey,
}
