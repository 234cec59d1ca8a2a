use anchor_lang::prelude::*;

use crate::utils::constants::campaign::*;

#[account]
#[derive(Debug, Default, InitSpace, PartialEq, Eq)]
pub struct Campaign {
    pub airdrop_token_mint: Pubkey,
    pub bump: u8,
    pub creator: Pubkey,
    pub expiration_time: i64,
    pub first_claim_time: i64,
    #[max_len(CAMPAIGN_IPFS_CID_SIZE)]
    pub ipfs_cid: String,
    pub merkle_root: [u8; 32],
    #[max_len(CAMPAIGN_NAME_SIZE)]
    pub name: String,
}

impl Campaign {
    /// State update for the [`fn@crate::sablier_merkle_instant::claim`] instruction.
    pub fn claim(&mut self, now: i64) -> Result<()> {
        // Record the time of the first claim, which starts the grace period.
        if self.first_claim_time == 0 {
            self.first_claim_time = now;
        }

        Ok(())
    }

    /// State update for the [`fn@crate::sablier_merkle_instant::create_campaign`] instruction.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        airdrop_token_mint: Pubkey,
        bump: u8,
        creator: Pubkey,
        expiration_time: i64,
        ipfs_cid: String,
        merkle_root: [u8; 32],
        name: String,
    ) -> Result<()> {
        self.airdrop_token_mint = airdrop_token_mint;
        self.bump = bump;
        self.creator = creator;
        self.expiration_time = expiration_time;
        self.first_claim_time = 0;
        self.ipfs_cid = ipfs_cid;
        self.merkle_root = merkle_root;
        self.name = name;

        Ok(())
    }
}
