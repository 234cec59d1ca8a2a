use anchor_lang::{error::ErrorCode as AnchorErrorCode, prelude::*};
use sablier_common::{
    create_ata_if_needed, get_ata_address, load_mint, load_token_account, transfer_tokens, InvokeContext,
};

use crate::utils::{
    accounts::{load_stream_data, load_treasury},
    constants::{seeds::STREAM_DATA, WITHDRAWAL_FEE_LAMPORTS},
    events::WithdrawFromLockupStream,
    validations::check_withdraw,
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct Withdraw {
    // -------------------------------------------------------------------------- //
    //                               USER ACCOUNTS                                //
    // -------------------------------------------------------------------------- //
    /// Write account: the signer of the withdrawal who pays the withdrawal fee.
    pub signer: Pubkey,

    /// Read account: the recipient of the stream, i.e. the holder of the stream NFT.
    pub stream_recipient: Pubkey,

    /// Read account: the account that will receive the withdrawn tokens. Must be the stream recipient - or, if the
    /// signer is the stream recipient, it can be any address.
    pub withdrawal_recipient: Pubkey,

    // -------------------------------------------------------------------------- //
    //                               STREAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Read account: the mint account for the deposited token. Must match `stream_data.deposited_token_mint`.
    pub deposited_token_mint: Pubkey,

    /// Read account: the mint account for the stream NFT.
    pub stream_nft_mint: Pubkey,

    // -------------------------------------------------------------------------- //
    //                               PROGRAM ACCOUNTS                             //
    // -------------------------------------------------------------------------- //
    /// Program account: the Token program of the deposited token.
    pub deposited_token_program: Pubkey,

    /// Program account: the Token program of the stream NFT.
    pub nft_token_program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::sablier_lockup::withdraw`].
pub fn handler(ctx: &mut InvokeContext, accounts: &Withdraw, amount: u64) -> Result<()> {
    let signer = &accounts.signer;
    let deposited_token_mint = &accounts.deposited_token_mint;
    let deposited_token_program = &accounts.deposited_token_program;

    let (treasury, _) = load_treasury(ctx)?;
    let (stream_data_address, mut stream_data) = load_stream_data(ctx, &accounts.stream_nft_mint)?;

    ctx.require_signer(signer)?;
    if *deposited_token_mint != stream_data.deposited_token_mint {
        return Err(AnchorErrorCode::ConstraintAddress.into());
    }

    // Check: the stream recipient holds the stream NFT.
    let stream_recipient_nft_ata =
        get_ata_address(&accounts.stream_recipient, &accounts.stream_nft_mint, &accounts.nft_token_program);
    let nft_holding = load_token_account(ctx, &stream_recipient_nft_ata, &accounts.nft_token_program)?;
    if nft_holding.mint != accounts.stream_nft_mint || nft_holding.amount != 1 {
        return Err(AnchorErrorCode::ConstraintRaw.into());
    }

    // Check: only the stream recipient can withdraw to a third party.
    if accounts.withdrawal_recipient != accounts.stream_recipient && *signer != accounts.stream_recipient {
        return Err(AnchorErrorCode::ConstraintRaw.into());
    }

    // Check: validate the withdrawal.
    check_withdraw(&stream_data, amount, ctx.unix_timestamp())?;

    // Effect: update the stream data state.
    stream_data.withdraw(amount)?;
    ctx.store(&stream_data_address, &stream_data)?;

    // Interaction: charge the withdrawal fee.
    ctx.transfer_lamports(signer, &treasury, WITHDRAWAL_FEE_LAMPORTS)?;

    // Interaction: transfer the tokens from the stream ATA to the withdrawal recipient.
    let decimals = load_mint(ctx, deposited_token_mint, deposited_token_program)?.decimals;
    let withdrawal_recipient_ata = create_ata_if_needed(
        ctx,
        signer,
        &accounts.withdrawal_recipient,
        deposited_token_mint,
        deposited_token_program,
    )?;
    transfer_tokens(
        ctx,
        &get_ata_address(&stream_data_address, deposited_token_mint, deposited_token_program),
        &withdrawal_recipient_ata,
        &stream_data_address,
        deposited_token_mint,
        deposited_token_program,
        amount,
        decimals,
        &[&[STREAM_DATA, accounts.stream_nft_mint.as_ref(), &[stream_data.bump]]],
    )?;

    // Log the withdrawal.
    emit!(WithdrawFromLockupStream {
        deposited_token_mint: *deposited_token_mint,
        fee_in_lamports: WITHDRAWAL_FEE_LAMPORTS,
        stream_data: stream_data_address,
        stream_nft_mint: accounts.stream_nft_mint,
        withdrawal_recipient: accounts.withdrawal_recipient,
        withdrawn_amount: amount,
    });

    Ok(())
}
