use anchor_lang::{error::ErrorCode as AnchorErrorCode, prelude::*};
use sablier_common::{safe_collectible_amount, InvokeContext};

use crate::utils::{accounts::load_treasury, events::FeesCollected, validations::check_collect_fees};

#[derive(Clone, Debug)]
pub struct CollectFees {
    // -------------------------------------------------------------------------- //
    //                                USER ACCOUNTS                               //
    // -------------------------------------------------------------------------- //
    /// Write account: the account authorized to collect fees from the treasury. Must match `treasury.fee_collector`.
    pub fee_collector: Pubkey,

    /// Write account: the address that will receive the collected fees.
    pub fee_recipient: Pubkey,
}

/// See the documentation for [`fn@crate::sablier_lockup::collect_fees`].
pub fn handler(ctx: &mut InvokeContext, accounts: &CollectFees) -> Result<()> {
    let (treasury, treasury_data) = load_treasury(ctx)?;

    ctx.require_signer(&accounts.fee_collector)?;
    if accounts.fee_collector != treasury_data.fee_collector {
        return Err(AnchorErrorCode::ConstraintAddress.into());
    }

    // Calculate the amount collectible from the treasury in lamport units.
    let collectible_amount = safe_collectible_amount(ctx, &treasury)?;

    // Check: validate the collectible amount.
    check_collect_fees(collectible_amount)?;

    // Interaction: transfer the collect amount from the treasury to the fee recipient.
    ctx.sub_lamports(&treasury, collectible_amount)?;
    ctx.add_lamports(&accounts.fee_recipient, collectible_amount)?;

    // Log the fee collection.
    emit!(FeesCollected {
        fee_amount: collectible_amount,
        fee_collector: accounts.fee_collector,
        fee_recipient: accounts.fee_recipient,
    });

    Ok(())
}
