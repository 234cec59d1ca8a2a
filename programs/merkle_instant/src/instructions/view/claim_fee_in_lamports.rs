use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::utils::{accounts::load_treasury, constants::CLAIM_FEE_LAMPORTS};

/// See the documentation for [`fn@crate::sablier_merkle_instant::claim_fee_in_lamports`].
pub fn handler(ctx: &InvokeContext) -> Result<u64> {
    load_treasury(ctx)?;
    Ok(CLAIM_FEE_LAMPORTS)
}
