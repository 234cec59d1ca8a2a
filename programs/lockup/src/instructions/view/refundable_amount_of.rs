use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::StreamView;
use crate::utils::lockup_math::get_refundable_amount;

/// See the documentation for [`fn@crate::sablier_lockup::refundable_amount_of`].
pub fn handler(ctx: &InvokeContext, accounts: &StreamView) -> Result<u64> {
    let stream_data = accounts.stream_data(ctx)?;
    Ok(get_refundable_amount(&stream_data, ctx.unix_timestamp()))
}
