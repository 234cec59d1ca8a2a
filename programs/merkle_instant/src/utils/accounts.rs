//! Loaders for the Merkle Instant program accounts.

use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{
    state::{campaign::Campaign, treasury::Treasury},
    utils::pda::find_treasury_address,
};

pub fn load_treasury(ctx: &InvokeContext) -> Result<(Pubkey, Treasury)> {
    let (treasury, _) = find_treasury_address();
    Ok((treasury, ctx.load::<Treasury>(&treasury)?))
}

/// Campaigns are addressed directly: the loader checks that the account is a campaign owned by this program.
pub fn load_campaign(ctx: &InvokeContext, campaign: &Pubkey) -> Result<Campaign> {
    ctx.load::<Campaign>(campaign)
}
