use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::CampaignView;
use crate::utils::validations::has_grace_period_passed;

/// See the documentation for [`fn@crate::sablier_merkle_instant::has_grace_period_passed`].
pub fn handler(ctx: &InvokeContext, accounts: &CampaignView) -> Result<bool> {
    let campaign = accounts.campaign_data(ctx)?;
    Ok(has_grace_period_passed(campaign.first_claim_time, ctx.unix_timestamp()))
}
