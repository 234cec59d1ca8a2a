//! Loaders for the Lockup program accounts, each checking the account's derived address.

use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{
    state::{lockup::StreamData, nft_collection_data::NftCollectionData, treasury::Treasury},
    utils::pda::{find_nft_collection_data_address, find_stream_data_address, find_treasury_address},
};

pub fn load_treasury(ctx: &InvokeContext) -> Result<(Pubkey, Treasury)> {
    let (treasury, _) = find_treasury_address();
    Ok((treasury, ctx.load::<Treasury>(&treasury)?))
}

pub fn load_nft_collection_data(ctx: &InvokeContext) -> Result<(Pubkey, NftCollectionData)> {
    let (nft_collection_data, _) = find_nft_collection_data_address();
    Ok((nft_collection_data, ctx.load::<NftCollectionData>(&nft_collection_data)?))
}

pub fn load_stream_data(ctx: &InvokeContext, stream_nft_mint: &Pubkey) -> Result<(Pubkey, StreamData)> {
    let (stream_data, _) = find_stream_data_address(stream_nft_mint);
    Ok((stream_data, ctx.load::<StreamData>(&stream_data)?))
}
