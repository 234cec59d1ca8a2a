#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use sablier_common::Bank;

pub mod instructions;
pub mod state;
pub mod utils;

use crate::{
    instructions::*,
    state::{campaign::Campaign, treasury::Treasury},
};

declare_id!("GthZ6aQHJonsia3jpdrSBukxipyRfo9TR5ZrepGXLTQR"); // Localnet & Devnet Program ID

/// The Merkle Instant program. Every instruction is executed as an atomic transaction against the given [`Bank`].
pub mod sablier_merkle_instant {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //                          STATE-CHANGING IXs                            //
    ////////////////////////////////////////////////////////////////////////////

    /// Claims an airdrop on behalf of an eligible recipient and transfers it to the recipient ATA.
    ///
    /// Notes:
    /// - The first claim of a campaign starts its clawback grace period.
    /// - This function attempts to create the recipient's ATA if it doesn't exist yet.
    /// - Emits a {Claim} event.
    ///
    /// Accounts expected:
    /// - `claimer` The transaction signer, who pays the claim fee.
    /// - `recipient` The address of the airdrop recipient.
    /// - `campaign` The account that stores the campaign details.
    /// - `airdrop_token_mint` The mint of the airdropped token.
    /// - `airdrop_token_program` The Token Program of the airdropped token.
    ///
    /// Parameters:
    /// - `index` The index of the recipient in the Merkle tree.
    /// - `amount` The amount allocated to the recipient.
    /// - `merkle_proof` The proof of inclusion in the Merkle tree.
    ///
    /// Requirements:
    /// - The campaign must not have expired.
    /// - The `index` must not be claimed already.
    /// - The Merkle proof must be valid.
    /// - The campaign ATA must hold at least `amount` tokens.
    pub fn claim(bank: &mut Bank, accounts: Claim, index: u32, amount: u64, merkle_proof: Vec<[u8; 32]>) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.claimer], |ctx| {
            instructions::claim::handler(ctx, &accounts, index, amount, merkle_proof)
        })
    }

    /// Claws back the unclaimed tokens to the campaign creator.
    ///
    /// Notes:
    /// - This function attempts to create the creator's ATA if it doesn't exist yet.
    /// - Emits a {Clawback} event.
    ///
    /// Accounts expected:
    /// - `campaign_creator` The transaction signer.
    /// - `campaign` The account that stores the campaign details.
    /// - `airdrop_token_mint` The mint of the airdropped token.
    /// - `airdrop_token_program` The Token Program of the airdropped token.
    ///
    /// Parameters:
    /// - `amount` The amount to claw back.
    ///
    /// Requirements:
    /// - The signer must be the actual campaign creator.
    /// - No claim must be made, OR the current timestamp must not exceed 7 days after the first claim, OR the
    /// campaign must be expired.
    pub fn clawback(bank: &mut Bank, accounts: Clawback, amount: u64) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.campaign_creator], |ctx| {
            instructions::clawback::handler(ctx, &accounts, amount)
        })
    }

    /// Collects the fees accumulated in the treasury by transferring them to the fee recipient.
    ///
    /// Notes:
    /// - Leaves a buffer of 0.001 SOL to ensure the account remains rent-exempt after the fee collection.
    /// - Emits a {FeesCollected} event.
    ///
    /// Accounts expected:
    /// - `fee_collector` The transaction signer and the fee collector.
    /// - `fee_recipient` The address receiving the collected fees.
    ///
    /// Requirements:
    /// - `fee_collector` must be authorized for fee collection.
    /// - The collectible amount must be greater than zero.
    pub fn collect_fees(bank: &mut Bank, accounts: CollectFees) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.fee_collector], |ctx| {
            instructions::collect_fees::handler(ctx, &accounts)
        })
    }

    /// Creates a new airdrop campaign with instant distribution of tokens.
    ///
    /// Notes:
    /// - The campaign is funded by transferring tokens to its ATA, which is created here.
    /// - Emits a {CreateCampaign} event.
    ///
    /// Accounts expected:
    /// - `creator` The transaction signer and the campaign creator.
    /// - `airdrop_token_mint` The mint of the airdropped token.
    /// - `airdrop_token_program` The Token Program of the airdropped token.
    ///
    /// Parameters:
    /// - `merkle_root` The Merkle root of the claim data.
    /// - `expiration_time` The time when the campaign expires, in seconds since the Unix epoch. A value of zero means
    /// the campaign does not expire.
    /// - `name` The name of the campaign.
    /// - `ipfs_cid` The content identifier for indexing the campaign on IPFS.
    /// - `aggregate_amount` The total amount of tokens to be distributed to all recipients.
    /// - `recipient_count` The total number of recipient addresses eligible for the airdrop.
    ///
    /// Requirements:
    /// - `name` and `ipfs_cid` must not exceed 32 bytes.
    /// - A campaign with the same parameters must not exist.
    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        bank: &mut Bank,
        accounts: CreateCampaign,
        merkle_root: [u8; 32],
        expiration_time: i64,
        name: String,
        ipfs_cid: String,
        aggregate_amount: u64,
        recipient_count: u32,
    ) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.creator], |ctx| {
            instructions::create_campaign::handler(
                ctx,
                &accounts,
                merkle_root,
                expiration_time,
                name,
                ipfs_cid,
                aggregate_amount,
                recipient_count,
            )
        })
    }

    /// Initializes the program with the provided fee collector address.
    ///
    /// Accounts expected:
    /// - `initializer` The transaction signer.
    ///
    /// Parameters:
    /// - `fee_collector` The address that will have the authority to collect fees.
    ///
    /// Requirements:
    /// - The program must not have been initialized already.
    pub fn initialize(bank: &mut Bank, accounts: Initialize, fee_collector: Pubkey) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.initializer], |ctx| {
            instructions::initialize::handler(ctx, &accounts, fee_collector)
        })
    }

    ////////////////////////////////////////////////////////////////////////////
    //                              READ-ONLY IXS                             //
    ////////////////////////////////////////////////////////////////////////////

    /// Returns the campaign details.
    ///
    /// Accounts expected:
    /// - `campaign` The account that stores the campaign details.
    pub fn campaign_view(bank: &Bank, accounts: CampaignView) -> Result<Campaign> {
        bank.simulate_transaction(&ID, |ctx| instructions::campaign_view::handler(ctx, &accounts))
    }

    /// Returns the claim fee in lamports.
    pub fn claim_fee_in_lamports(bank: &Bank) -> Result<u64> {
        bank.simulate_transaction(&ID, |ctx| instructions::claim_fee_in_lamports::handler(ctx))
    }

    /// Returns a flag indicating whether a claim has been made for the given index.
    ///
    /// Accounts expected:
    /// - `campaign` The account that stores the campaign details.
    ///
    /// Parameters:
    /// - `index` The index of the recipient in the Merkle tree.
    pub fn has_claimed(bank: &Bank, accounts: CampaignView, index: u32) -> Result<bool> {
        bank.simulate_transaction(&ID, |ctx| instructions::has_claimed::handler(ctx, &accounts, index))
    }

    /// Returns a flag indicating whether the campaign has expired.
    ///
    /// Accounts expected:
    /// - `campaign` The account that stores the campaign details.
    pub fn has_expired(bank: &Bank, accounts: CampaignView) -> Result<bool> {
        bank.simulate_transaction(&ID, |ctx| instructions::has_expired::handler(ctx, &accounts))
    }

    /// Returns a flag indicating whether the grace period of the campaign has passed.
    ///
    /// Accounts expected:
    /// - `campaign` The account that stores the campaign details.
    pub fn has_grace_period_passed(bank: &Bank, accounts: CampaignView) -> Result<bool> {
        bank.simulate_transaction(&ID, |ctx| instructions::has_grace_period_passed::handler(ctx, &accounts))
    }

    /// Returns the treasury details.
    pub fn treasury_view(bank: &Bank) -> Result<Treasury> {
        bank.simulate_transaction(&ID, |ctx| instructions::treasury_view::handler(ctx))
    }
}
