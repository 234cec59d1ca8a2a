use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{
    state::lockup::StreamData,
    utils::pda::{find_stream_data_address, find_stream_nft_mint_address},
};

/// See the documentation for [`fn@crate::sablier_lockup::stream_exists`].
pub fn handler(ctx: &InvokeContext, sender: Pubkey, salt: u128) -> Result<bool> {
    // A stream exists once its data account has been initialized by this program.
    let (stream_nft_mint, _) = find_stream_nft_mint_address(&sender, salt);
    let (stream_data, _) = find_stream_data_address(&stream_nft_mint);
    Ok(ctx.load::<StreamData>(&stream_data).is_ok())
}
