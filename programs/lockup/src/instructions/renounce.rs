use anchor_lang::{error::ErrorCode as AnchorErrorCode, prelude::*};
use sablier_common::InvokeContext;

use crate::utils::{
    accounts::{load_stream_data, load_treasury},
    events::RenounceLockupStream,
    validations::check_renounce,
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct Renounce {
    /// Read account: the sender of the stream. Must match `stream_data.sender`.
    pub sender: Pubkey,

    /// Read account: the mint account for the stream NFT.
    pub stream_nft_mint: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::sablier_lockup::renounce`].
pub fn handler(ctx: &mut InvokeContext, accounts: &Renounce) -> Result<()> {
    load_treasury(ctx)?;
    let (stream_data_address, mut stream_data) = load_stream_data(ctx, &accounts.stream_nft_mint)?;

    ctx.require_signer(&accounts.sender)?;
    if accounts.sender != stream_data.sender {
        return Err(AnchorErrorCode::ConstraintAddress.into());
    }

    // Check: validate the renounce.
    check_renounce(&stream_data, ctx.unix_timestamp())?;

    // Effect: update the stream data state.
    stream_data.renounce()?;
    ctx.store(&stream_data_address, &stream_data)?;

    // Log the renouncement.
    emit!(RenounceLockupStream {
        deposited_token_mint: stream_data.deposited_token_mint,
        stream_data: stream_data_address,
        stream_nft_mint: accounts.stream_nft_mint,
    });

    Ok(())
}
