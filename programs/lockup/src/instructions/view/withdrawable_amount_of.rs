use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::StreamView;
use crate::utils::lockup_math::get_withdrawable_amount;

/// See the documentation for [`fn@crate::sablier_lockup::withdrawable_amount_of`].
pub fn handler(ctx: &InvokeContext, accounts: &StreamView) -> Result<u64> {
    Ok(get_withdrawable_amount(&accounts.stream_data(ctx)?, ctx.unix_timestamp()))
}
