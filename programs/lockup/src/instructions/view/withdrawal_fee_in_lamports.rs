use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::utils::{accounts::load_treasury, constants::WITHDRAWAL_FEE_LAMPORTS};

/// See the documentation for [`fn@crate::sablier_lockup::withdrawal_fee_in_lamports`].
pub fn handler(ctx: &InvokeContext) -> Result<u64> {
    // Check: the program is initialized.
    load_treasury(ctx)?;

    Ok(WITHDRAWAL_FEE_LAMPORTS)
}
