use anchor_lang::{error::ErrorCode as AnchorErrorCode, prelude::*};
use sablier_common::{create_ata_if_needed, get_ata_address, load_mint, transfer_tokens, InvokeContext};

use crate::utils::{
    accounts::{load_campaign, load_treasury},
    constants::seeds::CAMPAIGN,
    events::Clawback as ClawbackEvent,
    validations::check_clawback,
};

#[derive(Clone, Debug)]
pub struct Clawback {
    /// Write account: the campaign creator, who receives the clawed back tokens.
    pub campaign_creator: Pubkey,

    /// Write account: the campaign.
    pub campaign: Pubkey,

    /// Read account: the mint account of the airdropped token.
    pub airdrop_token_mint: Pubkey,

    /// Program account: the Token program of the airdropped token.
    pub airdrop_token_program: Pubkey,
}

/// See the documentation for [`fn@crate::sablier_merkle_instant::clawback`].
pub fn handler(ctx: &mut InvokeContext, accounts: &Clawback, amount: u64) -> Result<()> {
    let campaign_creator = &accounts.campaign_creator;
    let campaign = &accounts.campaign;
    let airdrop_token_mint = &accounts.airdrop_token_mint;
    let airdrop_token_program = &accounts.airdrop_token_program;

    load_treasury(ctx)?;
    let campaign_data = load_campaign(ctx, campaign)?;

    // Check: the signer is the campaign creator.
    ctx.require_signer(campaign_creator)?;
    if *campaign_creator != campaign_data.creator || *airdrop_token_mint != campaign_data.airdrop_token_mint {
        return Err(AnchorErrorCode::ConstraintAddress.into());
    }

    // Check: validate the clawback.
    check_clawback(campaign_data.expiration_time, campaign_data.first_claim_time, ctx.unix_timestamp())?;

    // Interaction: transfer the tokens from the campaign ATA to the campaign creator ATA.
    let decimals = load_mint(ctx, airdrop_token_mint, airdrop_token_program)?.decimals;
    let creator_ata =
        create_ata_if_needed(ctx, campaign_creator, campaign_creator, airdrop_token_mint, airdrop_token_program)?;
    let expiration_time_bytes = campaign_data.expiration_time.to_le_bytes();
    transfer_tokens(
        ctx,
        &get_ata_address(campaign, airdrop_token_mint, airdrop_token_program),
        &creator_ata,
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

    // Log the clawback.
    emit!(ClawbackEvent {
        amount,
        campaign: *campaign,
        campaign_creator: *campaign_creator,
    });

    Ok(())
}
