use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use super::create_with_timestamps::{self, CreateWithTimestamps};

/// See the documentation for [`fn@crate::sablier_lockup::create_with_durations`].
#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: &mut InvokeContext,
    accounts: &CreateWithTimestamps,
    salt: u128,
    deposit_amount: u64,
    cliff_duration: i64,
    total_duration: i64,
    start_unlock_amount: u64,
    cliff_unlock_amount: u64,
    is_cancelable: bool,
) -> Result<()> {
    // Declare the start time as the current unix timestamp.
    let start_time = ctx.unix_timestamp();

    // Calculate the cliff time by adding the cliff duration to the start time using checked math.
    let cliff_time = if cliff_duration > 0 {
        start_time.checked_add(cliff_duration).ok_or(ProgramError::ArithmeticOverflow)?
    } else {
        0
    };

    // Calculate the end time by adding the total duration to the start time using checked math.
    let end_time = start_time.checked_add(total_duration).ok_or(ProgramError::ArithmeticOverflow)?;

    // Checks, Effects, Interactions: create the stream.
    create_with_timestamps::handler(
        ctx,
        accounts,
        salt,
        deposit_amount,
        start_time,
        cliff_time,
        end_time,
        start_unlock_amount,
        cliff_unlock_amount,
        is_cancelable,
    )
}
