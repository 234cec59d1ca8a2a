use anchor_lang::prelude::*;
use sablier_common::{create_ata, load_mint, InvokeContext};

use crate::{
    state::campaign::Campaign,
    utils::{
        accounts::load_treasury, constants::ANCHOR_DISCRIMINATOR_SIZE, events::CreateCampaign as CreateCampaignEvent,
        pda::find_campaign_address, validations::check_create_campaign,
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct CreateCampaign {
    /// Write account: the creator of the campaign, who pays for the campaign accounts.
    pub creator: Pubkey,

    /// Read account: the mint account of the airdropped token.
    pub airdrop_token_mint: Pubkey,

    /// Program account: the Token program of the airdropped token.
    pub airdrop_token_program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::sablier_merkle_instant::create_campaign`].
#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: &mut InvokeContext,
    accounts: &CreateCampaign,
    merkle_root: [u8; 32],
    expiration_time: i64,
    name: String,
    ipfs_cid: String,
    aggregate_amount: u64,
    recipient_count: u32,
) -> Result<()> {
    let creator = &accounts.creator;
    let airdrop_token_mint = &accounts.airdrop_token_mint;

    load_treasury(ctx)?;
    ctx.require_signer(creator)?;

    // Check: validate the campaign creation. This must precede the address derivation, as the name and the CID are
    // used as seeds.
    check_create_campaign(&name, &ipfs_cid)?;

    let airdrop_token_decimals = load_mint(ctx, airdrop_token_mint, &accounts.airdrop_token_program)?.decimals;

    // Effect: create the campaign. A campaign with the same parameters already exists if this fails.
    let (campaign, campaign_bump) =
        find_campaign_address(creator, &merkle_root, expiration_time, &ipfs_cid, &name, airdrop_token_mint);
    let mut campaign_data = Campaign::default();
    campaign_data.create(
        *airdrop_token_mint,
        campaign_bump,
        *creator,
        expiration_time,
        ipfs_cid.clone(),
        merkle_root,
        name.clone(),
    )?;
    ctx.init(creator, &campaign, ANCHOR_DISCRIMINATOR_SIZE + Campaign::INIT_SPACE, &campaign_data)?;

    // Interaction: create the campaign ATA, to be funded by the campaign creator or anyone else.
    create_ata(ctx, creator, &campaign, airdrop_token_mint, &accounts.airdrop_token_program)?;

    // Log the campaign creation.
    emit!(CreateCampaignEvent {
        aggregate_amount,
        airdrop_token_decimals,
        airdrop_token_mint: *airdrop_token_mint,
        campaign,
        campaign_name: name,
        creator: *creator,
        expiration_time,
        ipfs_cid,
        merkle_root,
        recipient_count,
    });

    Ok(())
}
