use anchor_lang::{error::ErrorCode as AnchorErrorCode, prelude::*};
use sablier_common::{create_ata_if_needed, get_ata_address, load_mint, transfer_tokens, InvokeContext};

use crate::utils::{
    accounts::{load_stream_data, load_treasury},
    constants::seeds::STREAM_DATA,
    events::CancelLockupStream,
    lockup_math::{get_refundable_amount, get_withdrawable_amount},
    validations::check_cancel,
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct Cancel {
    // -------------------------------------------------------------------------- //
    //                                USER ACCOUNTS                               //
    // -------------------------------------------------------------------------- //
    /// Write account: the sender of the stream who can cancel it. Must match `stream_data.sender`.
    pub sender: Pubkey,

    // -------------------------------------------------------------------------- //
    //                               STREAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Read account: the mint account for the deposited token. Must match `stream_data.deposited_token_mint`.
    pub deposited_token_mint: Pubkey,

    /// Read account: the mint account for the stream NFT.
    pub stream_nft_mint: Pubkey,

    // -------------------------------------------------------------------------- //
    //                              PROGRAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Program account: the Token program of the deposited token.
    pub deposited_token_program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::sablier_lockup::cancel`].
pub fn handler(ctx: &mut InvokeContext, accounts: &Cancel) -> Result<()> {
    let sender = &accounts.sender;
    let deposited_token_mint = &accounts.deposited_token_mint;
    let deposited_token_program = &accounts.deposited_token_program;

    load_treasury(ctx)?;
    let (stream_data_address, mut stream_data) = load_stream_data(ctx, &accounts.stream_nft_mint)?;

    // Check: the signer is the stream's sender.
    ctx.require_signer(sender)?;
    if *sender != stream_data.sender {
        return Err(AnchorErrorCode::ConstraintAddress.into());
    }
    if *deposited_token_mint != stream_data.deposited_token_mint {
        return Err(AnchorErrorCode::ConstraintAddress.into());
    }

    let now = ctx.unix_timestamp();

    // Check: validate the cancellation.
    check_cancel(&stream_data, now)?;

    // Calculate the amounts owed to each party.
    let sender_amount = get_refundable_amount(&stream_data, now);
    let recipient_amount = get_withdrawable_amount(&stream_data, now);

    // Effect: update the stream data state.
    stream_data.cancel(sender_amount, recipient_amount)?;
    ctx.store(&stream_data_address, &stream_data)?;

    // Interaction: transfer the refund from the StreamData ATA to the sender's ATA.
    if sender_amount > 0 {
        let decimals = load_mint(ctx, deposited_token_mint, deposited_token_program)?.decimals;
        let sender_ata = create_ata_if_needed(ctx, sender, sender, deposited_token_mint, deposited_token_program)?;
        transfer_tokens(
            ctx,
            &get_ata_address(&stream_data_address, deposited_token_mint, deposited_token_program),
            &sender_ata,
            &stream_data_address,
            deposited_token_mint,
            deposited_token_program,
            sender_amount,
            decimals,
            &[&[STREAM_DATA, accounts.stream_nft_mint.as_ref(), &[stream_data.bump]]],
        )?;
    }

    // Log the cancellation.
    emit!(CancelLockupStream {
        deposited_token_mint: *deposited_token_mint,
        recipient_amount,
        sender_amount,
        stream_data: stream_data_address,
        stream_nft_mint: accounts.stream_nft_mint,
    });

    Ok(())
}
