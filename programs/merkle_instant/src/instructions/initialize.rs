use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{
    state::treasury::Treasury,
    utils::{constants::ANCHOR_DISCRIMINATOR_SIZE, pda::find_treasury_address},
};

#[derive(Clone, Debug)]
pub struct Initialize {
    /// Write account: the initializer of the program, who pays for the treasury.
    pub initializer: Pubkey,
}

/// See the documentation for [`fn@crate::sablier_merkle_instant::initialize`].
pub fn handler(ctx: &mut InvokeContext, accounts: &Initialize, fee_collector: Pubkey) -> Result<()> {
    ctx.require_signer(&accounts.initializer)?;

    let (treasury, treasury_bump) = find_treasury_address();
    let mut treasury_data = Treasury::default();
    treasury_data.initialize(treasury_bump, fee_collector)?;
    ctx.init(&accounts.initializer, &treasury, ANCHOR_DISCRIMINATOR_SIZE + Treasury::INIT_SPACE, &treasury_data)?;

    msg!("The Merkle Instant program has been initialized with the fee collector {}", fee_collector);

    Ok(())
}
