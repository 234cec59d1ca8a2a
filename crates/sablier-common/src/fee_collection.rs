use anchor_lang::prelude::*;

use crate::bank::InvokeContext;

/// Buffer kept on top of the rent-exempt minimum when collecting fees: 0.001 SOL.
pub const RENT_BUFFER_LAMPORTS: u64 = 1_000_000;

/// Helper function to calculate the amount collectible from an account. It takes an extra-safe approach by adding a
/// buffer to the rent exemption, ensuring that the account balance does not fall below the rent-exempt minimum (which
/// would, otherwise, make the program unusable).
pub fn safe_collectible_amount(ctx: &InvokeContext, address: &Pubkey) -> Result<u64> {
    let current_balance = ctx.lamports(address);

    // Calculate the minimum balance needed for rent exemption.
    let rent_exempt_minimum = ctx.rent().minimum_balance(ctx.data_len(address));
    let safe_minimum =
        rent_exempt_minimum.checked_add(RENT_BUFFER_LAMPORTS).ok_or(ProgramError::ArithmeticOverflow)?;

    Ok(current_balance.saturating_sub(safe_minimum))
}
