use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::withdraw::{self, Withdraw};
use crate::utils::{accounts::load_stream_data, lockup_math::get_withdrawable_amount};

/// See the documentation for [`fn@crate::sablier_lockup::withdraw_max`].
pub fn handler(ctx: &mut InvokeContext, accounts: &Withdraw) -> Result<()> {
    let (_, stream_data) = load_stream_data(ctx, &accounts.stream_nft_mint)?;
    let withdrawable_amount = get_withdrawable_amount(&stream_data, ctx.unix_timestamp());

    withdraw::handler(ctx, accounts, withdrawable_amount)
}
