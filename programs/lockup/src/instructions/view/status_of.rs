use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::StreamView;
use crate::{state::lockup::StreamStatus, utils::lockup_math::get_status};

/// See the documentation for [`fn@crate::sablier_lockup::status_of`].
pub fn handler(ctx: &InvokeContext, accounts: &StreamView) -> Result<StreamStatus> {
    let stream_data = accounts.stream_data(ctx)?;
    Ok(get_status(&stream_data, ctx.unix_timestamp()))
}
