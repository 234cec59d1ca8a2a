use anchor_lang::prelude::*;

use crate::{
    state::lockup::StreamData,
    utils::{
        errors::ErrorCode,
        lockup_math::{get_status, get_streamed_amount, get_withdrawable_amount},
    },
};

/// Validate the cancellation of a stream at `now`.
pub fn check_cancel(stream_data: &StreamData, now: i64) -> Result<()> {
    // Check: the stream is not canceled.
    if stream_data.was_canceled {
        return Err(ErrorCode::StreamCanceled.into());
    }

    // Check: the stream is not depleted.
    if stream_data.is_depleted {
        return Err(ErrorCode::StreamDepleted.into());
    }

    // Check: the stream is cancelable.
    if !stream_data.is_cancelable {
        return Err(ErrorCode::StreamIsNotCancelable.into());
    }

    // Check: the stream is not settled.
    if get_streamed_amount(stream_data, now) >= stream_data.amounts.deposited {
        return Err(ErrorCode::StreamSettled.into());
    }

    Ok(())
}

pub fn check_collect_fees(collectible_amount: u64) -> Result<()> {
    // Check: the collectible amount is not zero.
    if collectible_amount == 0 {
        return Err(ErrorCode::CantCollectZeroFees.into());
    }

    Ok(())
}

// Validate the parameters for creating a Stream
pub fn check_create(
    deposit_amount: u64,
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    start_unlock_amount: u64,
    cliff_unlock_amount: u64,
) -> Result<()> {
    // Check: the deposit amount is not zero.
    if deposit_amount == 0 {
        return Err(ErrorCode::DepositAmountZero.into());
    }

    // Check: the start time is strictly positive.
    if start_time <= 0 {
        return Err(ErrorCode::StartTimeNotPositive.into());
    }

    // Since a cliff time of zero means there is no cliff, the following checks are performed only if it's not zero.
    if cliff_time > 0 {
        // Check: the start time is strictly less than the cliff time.
        if start_time >= cliff_time {
            return Err(ErrorCode::StartTimeNotLessThanCliffTime.into());
        }

        // Check: the cliff time is strictly less than the end time.
        if cliff_time >= end_time {
            return Err(ErrorCode::CliffTimeNotLessThanEndTime.into());
        }
    }
    // Check: the cliff unlock amount is zero when the cliff time is zero.
    else if cliff_unlock_amount > 0 {
        return Err(ErrorCode::CliffTimeZeroUnlockAmountNotZero.into());
    }

    // Check: the start time is strictly less than the end time.
    if start_time >= end_time {
        return Err(ErrorCode::StartTimeNotLessThanEndTime.into());
    }

    // Check: the sum of the start and cliff unlock amounts is not greater than the deposit amount.
    let unlock_amounts_sum = start_unlock_amount as u128 + cliff_unlock_amount as u128;
    if unlock_amounts_sum > deposit_amount as u128 {
        return Err(ErrorCode::UnlockAmountsSumTooHigh.into());
    }

    Ok(())
}

// Validate the renounce
pub fn check_renounce(stream_data: &StreamData, now: i64) -> Result<()> {
    // Check: the stream is neither cold, nor already non-cancelable.
    if get_status(stream_data, now).is_cold() || !stream_data.is_cancelable {
        return Err(ErrorCode::StreamAlreadyNonCancelable.into());
    }

    Ok(())
}

// Validate the withdraw
pub fn check_withdraw(stream_data: &StreamData, amount: u64, now: i64) -> Result<()> {
    // Check: the stream is not depleted.
    if stream_data.is_depleted {
        return Err(ErrorCode::StreamDepleted.into());
    }

    // Check: the withdraw amount is not zero.
    if amount == 0 {
        return Err(ErrorCode::WithdrawAmountZero.into());
    }

    // Check: the withdraw amount is not greater than the withdrawable amount.
    if amount > get_withdrawable_amount(stream_data, now) {
        return Err(ErrorCode::Overdraw.into());
    }

    Ok(())
}
