use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{state::campaign::Campaign, utils::accounts::load_campaign};

// Common context that is used by multiple view instructions
#[derive(Clone, Debug)]
pub struct CampaignView {
    /// Read account: the campaign.
    pub campaign: Pubkey,
}

impl CampaignView {
    pub fn campaign_data(&self, ctx: &InvokeContext) -> Result<Campaign> {
        load_campaign(ctx, &self.campaign)
    }
}

/// See the documentation for [`fn@crate::sablier_merkle_instant::campaign_view`].
pub fn handler(ctx: &InvokeContext, accounts: &CampaignView) -> Result<Campaign> {
    accounts.campaign_data(ctx)
}
