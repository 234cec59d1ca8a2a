//! Math functions for computing streamed, withdrawable and refundable amounts for Lockup streams.

use crate::state::lockup::{Amounts, StreamData, StreamStatus, Timestamps};

// -------------------------------------------------------------------------- //
//                              PUBLIC FUNCTIONS                              //
// -------------------------------------------------------------------------- //

/// Calculates the amount the sender would receive if they were to cancel the stream.
pub fn get_refundable_amount(stream_data: &StreamData, now: i64) -> u64 {
    // Note: checking `is_cancelable` also implicitly checks `was_canceled`
    // thanks to the protocol invariant that canceled streams are non-cancelable.
    if stream_data.is_cancelable && !stream_data.is_depleted {
        return stream_data.amounts.deposited.saturating_sub(get_streamed_amount(stream_data, now));
    }

    // Otherwise, return zero.
    0
}

/// Derives the status of the stream at `now`.
pub fn get_status(stream_data: &StreamData, now: i64) -> StreamStatus {
    if stream_data.is_depleted {
        return StreamStatus::Depleted;
    }

    if stream_data.was_canceled {
        return StreamStatus::Canceled;
    }

    if now < stream_data.timestamps.start {
        return StreamStatus::Pending;
    }

    if get_streamed_amount(stream_data, now) < stream_data.amounts.deposited {
        StreamStatus::Streaming
    } else {
        StreamStatus::Settled
    }
}

/// Calculates the total amount streamed to the recipient at `now`.
pub fn get_streamed_amount(stream_data: &StreamData, now: i64) -> u64 {
    // Handle the terminal states first
    if stream_data.is_depleted {
        return stream_data.amounts.withdrawn;
    }
    if stream_data.was_canceled {
        return stream_data.amounts.deposited.saturating_sub(stream_data.amounts.refunded);
    }

    get_streamed_amount_linear(&stream_data.timestamps, &stream_data.amounts, now)
}

/// Calculates the amount the recipient can withdraw at `now`.
pub fn get_withdrawable_amount(stream_data: &StreamData, now: i64) -> u64 {
    get_streamed_amount(stream_data, now).saturating_sub(stream_data.amounts.withdrawn)
}

// -------------------------------------------------------------------------- //
//                          PRIVATE HELPER FUNCTIONS                          //
// -------------------------------------------------------------------------- //

fn get_streamed_amount_linear(timestamps: &Timestamps, amounts: &Amounts, now: i64) -> u64 {
    // If the start time is in the future, return zero.
    if timestamps.start > now {
        return 0;
    }

    // If the cliff time is in the future, return the start unlock amount.
    if timestamps.cliff > now {
        return amounts.start_unlock;
    }

    // If the end time is in the past or right now, return the deposited amount.
    if timestamps.end <= now {
        return amounts.deposited;
    }

    // The sum is computed in u128 so that it can't overflow, even for malformed streams.
    let unlock_amounts_sum = amounts.start_unlock as u128 + amounts.cliff_unlock as u128;

    // If the sum of the unlock amounts is greater than or equal to the deposited amount, return the deposited
    // amount. The ">=" operator is used as a safety measure in case of a bug, as the sum of the unlock amounts
    // should never exceed the deposited amount.
    if unlock_amounts_sum >= amounts.deposited as u128 {
        return amounts.deposited;
    }

    // Determine the streaming start time.
    let streaming_start_time = if timestamps.cliff > 0 {
        timestamps.cliff
    } else {
        timestamps.start
    };

    // Both differences are positive here: `streaming_start_time <= now < end`.
    let elapsed_time = (now - streaming_start_time) as u128;
    let streamable_range = (timestamps.end - streaming_start_time) as u128;
    let streamable_amount = amounts.deposited as u128 - unlock_amounts_sum;

    // Multiply before dividing, so that the result is truncated only once.
    let streamed_amount = unlock_amounts_sum + streamable_amount * elapsed_time / streamable_range;

    // Although the streamed amount should never exceed the deposited amount, this condition is checked
    // without asserting to avoid locking tokens in case of a bug. If this situation occurs, the withdrawn
    // amount is considered to be the streamed amount, and the stream is effectively frozen.
    if streamed_amount > amounts.deposited as u128 {
        return amounts.withdrawn;
    }

    streamed_amount as u64
}

// -------------------------------------------------------------------------- //
//                                    TESTS                                   //
// -------------------------------------------------------------------------- //
