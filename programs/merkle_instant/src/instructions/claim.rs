use anchor_lang::{error::ErrorCode as AnchorErrorCode, prelude::*};
use sablier_common::{create_ata_if_needed, get_ata_address, load_mint, transfer_tokens, InvokeContext};

use crate::{
    state::claim_receipt::ClaimReceipt,
    utils::{
        accounts::{load_campaign, load_treasury},
        constants::{seeds::CAMPAIGN, ANCHOR_DISCRIMINATOR_SIZE, CLAIM_FEE_LAMPORTS},
        events::Claim as ClaimEvent,
        pda::find_claim_receipt_address,
        validations::check_claim,
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct Claim {
    // -------------------------------------------------------------------------- //
    //                                USER ACCOUNTS                               //
    // -------------------------------------------------------------------------- //
    /// Write account: the signer of the claim, who pays the claim fee and the rent.
    pub claimer: Pubkey,

    /// Read account: the recipient of the airdrop, as registered in the Merkle tree.
    pub recipient: Pubkey,

    // -------------------------------------------------------------------------- //
    //                              CAMPAIGN ACCOUNTS                             //
    // -------------------------------------------------------------------------- //
    /// Write account: the campaign.
    pub campaign: Pubkey,

    /// Read account: the mint account of the airdropped token.
    pub airdrop_token_mint: Pubkey,

    // -------------------------------------------------------------------------- //
    //                              PROGRAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Program account: the Token program of the airdropped token.
    pub airdrop_token_program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::sablier_merkle_instant::claim`].
pub fn handler(
    ctx: &mut InvokeContext,
    accounts: &Claim,
    index: u32,
    amount: u64,
    merkle_proof: Vec<[u8; 32]>,
) -> Result<()> {
    let claimer = &accounts.claimer;
    let campaign = &accounts.campaign;
    let airdrop_token_mint = &accounts.airdrop_token_mint;
    let airdrop_token_program = &accounts.airdrop_token_program;

    let (treasury, _) = load_treasury(ctx)?;
    let mut campaign_data = load_campaign(ctx, campaign)?;

    ctx.require_signer(claimer)?;
    if *airdrop_token_mint != campaign_data.airdrop_token_mint {
        return Err(AnchorErrorCode::ConstraintAddress.into());
    }

    // Check: the index has not been claimed.
    let (claim_receipt, _) = find_claim_receipt_address(campaign, index);
    if ctx.load::<ClaimReceipt>(&claim_receipt).is_ok() {
        return Err(ProgramError::AccountAlreadyInitialized.into());
    }

    let now = ctx.unix_timestamp();

    // Check: validate the claim.
    check_claim(
        campaign_data.expiration_time,
        now,
        index,
        &accounts.recipient,
        amount,
        &merkle_proof,
        &campaign_data.merkle_root,
    )?;

    // Effect: create the claim receipt.
    ctx.init(claimer, &claim_receipt, ANCHOR_DISCRIMINATOR_SIZE + ClaimReceipt::INIT_SPACE, &ClaimReceipt {})?;

    // Effect: update the campaign.
    campaign_data.claim(now)?;
    ctx.store(campaign, &campaign_data)?;

    // Interaction: charge the claim fee.
    ctx.transfer_lamports(claimer, &treasury, CLAIM_FEE_LAMPORTS)?;

    // Interaction: transfer the tokens from the campaign ATA to the recipient ATA.
    let decimals = load_mint(ctx, airdrop_token_mint, airdrop_token_program)?.decimals;
    let recipient_ata = create_ata_if_needed(ctx, claimer, &accounts.recipient, airdrop_token_mint, airdrop_token_program)?;
    let expiration_time_bytes = campaign_data.expiration_time.to_le_bytes();
    transfer_tokens(
        ctx,
        &get_ata_address(campaign, airdrop_token_mint, airdrop_token_program),
        &recipient_ata,
        campaign,
        airdrop_token_mint,
        airdrop_token_program,
        amount,
        decimals,
        &[&[
            CAMPAIGN,
            campaign_data.creator.as_ref(),
            campaign_data.merkle_root.as_ref(),
            expiration_time_bytes.as_ref(),
            campaign_data.ipfs_cid.as_bytes(),
            campaign_data.name.as_bytes(),
            campaign_data.airdrop_token_mint.as_ref(),
            &[campaign_data.bump],
        ]],
    )?;

    // Log the claim.
    emit!(ClaimEvent {
        amount,
        campaign: *campaign,
        claim_receipt,
        claimer: *claimer,
        fee_in_lamports: CLAIM_FEE_LAMPORTS,
        index,
        recipient: accounts.recipient,
    });

    Ok(())
}
