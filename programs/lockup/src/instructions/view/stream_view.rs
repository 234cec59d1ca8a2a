use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{state::lockup::StreamData, utils::accounts::load_stream_data};

// Common context that is used by multiple view instructions
#[derive(Clone, Debug)]
pub struct StreamView {
    /// Read account: the mint account for the stream NFT. The stream data is derived from it.
    pub stream_nft_mint: Pubkey,
}

impl StreamView {
    pub fn stream_data(&self, ctx: &InvokeContext) -> Result<StreamData> {
        let (_, stream_data) = load_stream_data(ctx, &self.stream_nft_mint)?;
        Ok(stream_data)
    }
}

/// See the documentation for [`fn@crate::sablier_lockup::stream_view`].
pub fn handler(ctx: &InvokeContext, accounts: &StreamView) -> Result<StreamData> {
    accounts.stream_data(ctx)
}
