use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::CampaignView;
use crate::{state::claim_receipt::ClaimReceipt, utils::pda::find_claim_receipt_address};

/// See the documentation for [`fn@crate::sablier_merkle_instant::has_claimed`].
pub fn handler(ctx: &InvokeContext, accounts: &CampaignView, index: u32) -> Result<bool> {
    accounts.campaign_data(ctx)?;

    let (claim_receipt, _) = find_claim_receipt_address(&accounts.campaign, index);
    Ok(ctx.load::<ClaimReceipt>(&claim_receipt).is_ok())
}
