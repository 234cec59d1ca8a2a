use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::CampaignView;
use crate::utils::validations::has_expired;

/// See the documentation for [`fn@crate::sablier_merkle_instant::has_expired`].
pub fn handler(ctx: &InvokeContext, accounts: &CampaignView) -> Result<bool> {
    let campaign = accounts.campaign_data(ctx)?;
    Ok(has_expired(campaign.expiration_time, ctx.unix_timestamp()))
}
