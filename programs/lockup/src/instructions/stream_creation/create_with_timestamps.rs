use anchor_lang::prelude::*;
use sablier_common::{create_ata, get_ata_address, load_mint, transfer_tokens, InvokeContext};

use crate::{
    state::lockup::StreamData,
    utils::{
        accounts::{load_nft_collection_data, load_treasury},
        constants::ANCHOR_DISCRIMINATOR_SIZE,
        events::CreateLockupStream,
        nft,
        pda::{find_stream_data_address, find_stream_nft_mint_address},
        validations::check_create,
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct CreateWithTimestamps {
    // -------------------------------------------------------------------------- //
    //                                USER ACCOUNTS                               //
    // -------------------------------------------------------------------------- //
    /// Write account: the creator and funder of the stream. Its ATA for the deposit token is debited.
    pub funder: Pubkey,

    /// Read account: the recipient of the stream.
    pub recipient: Pubkey,

    /// Read account: the sender of the stream, who will be able to cancel and renounce it.
    pub sender: Pubkey,

    // -------------------------------------------------------------------------- //
    //                               STREAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Read account: the mint account for the deposit token.
    pub deposit_token_mint: Pubkey,

    // -------------------------------------------------------------------------- //
    //                              PROGRAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Program account: the Token program of the deposit token.
    pub deposit_token_program: Pubkey,

    /// Program account: the Token program of the stream NFT.
    pub nft_token_program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::sablier_lockup::create_with_timestamps`].
#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: &mut InvokeContext,
    accounts: &CreateWithTimestamps,
    salt: u128,
    deposit_amount: u64,
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    start_unlock_amount: u64,
    cliff_unlock_amount: u64,
    is_cancelable: bool,
) -> Result<()> {
    let funder = &accounts.funder;
    let deposit_token_mint = &accounts.deposit_token_mint;
    let deposit_token_program = &accounts.deposit_token_program;

    // Check: the program is initialized.
    load_treasury(ctx)?;
    let (nft_collection_data, mut collection_data) = load_nft_collection_data(ctx)?;

    // Check: the funder signs the transaction.
    ctx.require_signer(funder)?;

    // Validate parameters
    check_create(deposit_amount, start_time, cliff_time, end_time, start_unlock_amount, cliff_unlock_amount)?;

    let deposit_token_decimals = load_mint(ctx, deposit_token_mint, deposit_token_program)?.decimals;

    // Effect: mint the NFT to the recipient. A stream with the same sender and salt already exists if this fails.
    let (stream_nft_mint, _) = find_stream_nft_mint_address(&accounts.sender, salt);
    nft::create_stream(ctx, &stream_nft_mint, &accounts.recipient, funder, &accounts.nft_token_program)?;

    // Effect: create the stream data.
    let (stream_data, stream_data_bump) = find_stream_data_address(&stream_nft_mint);
    let mut new_stream = StreamData::default();
    new_stream.create(
        *deposit_token_mint,
        stream_data_bump,
        cliff_time,
        cliff_unlock_amount,
        deposit_amount,
        end_time,
        salt,
        is_cancelable,
        accounts.sender,
        start_time,
        start_unlock_amount,
        stream_nft_mint,
    )?;
    ctx.init(funder, &stream_data, ANCHOR_DISCRIMINATOR_SIZE + StreamData::INIT_SPACE, &new_stream)?;

    // Effect: increment the total supply of the NFT collection.
    collection_data.create()?;
    ctx.store(&nft_collection_data, &collection_data)?;

    // Interaction: transfer tokens from the funder's ATA to the StreamData ATA.
    let stream_data_ata = create_ata(ctx, funder, &stream_data, deposit_token_mint, deposit_token_program)?;
    transfer_tokens(
        ctx,
        &get_ata_address(funder, deposit_token_mint, deposit_token_program),
        &stream_data_ata,
        funder,
        deposit_token_mint,
        deposit_token_program,
        deposit_amount,
        deposit_token_decimals,
        &[],
    )?;

    // Log the newly created stream.
    emit!(CreateLockupStream {
        deposit_token_decimals,
        deposit_token_mint: *deposit_token_mint,
        recipient: accounts.recipient,
        salt,
        stream_data,
        stream_nft_mint,
    });

    Ok(())
}
