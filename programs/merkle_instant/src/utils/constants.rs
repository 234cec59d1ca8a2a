// Account Seeds
pub mod seeds {
    pub const CAMPAIGN: &[u8] = b"campaign";
    pub const CLAIM_RECEIPT: &[u8] = b"claim_receipt";
    pub const TREASURY: &[u8] = b"treasury";
}

// Campaign
pub mod campaign {
    /// The maximum length of a PDA seed, which bounds the name and the IPFS CID of a campaign.
    pub const CAMPAIGN_NAME_SIZE: usize = 32;
    pub const CAMPAIGN_IPFS_CID_SIZE: usize = 32;

    /// The period after the first claim during which the creator can claw back freely.
    pub const CLAWBACK_GRACE_PERIOD: i64 = 7 * 24 * 60 * 60; // 7 days
}

// Miscellaneous
pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;
pub const CLAIM_FEE_LAMPORTS: u64 = 20_000_000; // 0.02 SOL
