#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use sablier_common::Bank;

pub mod instructions;
pub mod state;
pub mod utils;

use crate::{
    instructions::*,
    state::{
        lockup::{StreamData, StreamStatus},
        treasury::Treasury,
    },
};

declare_id!("9she3vL2CCmWjPBFVVXwu78kYg7TU8jm69siH3STngXm"); // Localnet & Devnet Program ID

/// The Lockup program. Every instruction is executed as an atomic transaction against the given [`Bank`].
pub mod sablier_lockup {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //                          STATE-CHANGING IXs                            //
    ////////////////////////////////////////////////////////////////////////////

    /// Cancels the stream and refunds any remaining tokens to the sender ATA.
    ///
    /// Notes:
    /// - If there are no tokens left for the recipient to withdraw, the stream is marked as depleted.
    /// - This function attempts to create the sender's ATA if it doesn't exist yet.
    /// - Emits a {CancelLockupStream} event.
    ///
    /// Accounts expected:
    /// - `sender` The transaction signer and the stream's sender.
    /// - `deposited_token_mint` The mint of the deposited token.
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    /// - `deposited_token_program` The Token Program of the deposited token.
    ///
    /// Requirements:
    /// - The signer must be the stream's sender.
    /// - The stream must neither have been canceled, nor be depleted.
    /// - The stream must be cancelable and not settled.
    pub fn cancel(bank: &mut Bank, accounts: Cancel) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.sender], |ctx| instructions::cancel::handler(ctx, &accounts))
    }

    /// Collects the fees accumulated in the treasury by transferring them to the fee recipient.
    ///
    /// Notes:
    /// - Leaves a buffer of 0.001 SOL to ensure the account remains rent-exempt after the fee collection.
    /// - Emits a {FeesCollected} event.
    ///
    /// Accounts expected:
    /// - `fee_collector` The transaction signer and the fee collector.
    /// - `fee_recipient` The address receiving the collected fees.
    ///
    /// Requirements:
    /// - `fee_collector` must be authorized for fee collection.
    /// - The collectible amount must be greater than zero.
    pub fn collect_fees(bank: &mut Bank, accounts: CollectFees) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.fee_collector], |ctx| {
            instructions::collect_fees::handler(ctx, &accounts)
        })
    }

    /// Creates a stream by setting the start time to the current timestamp, and the end time to the sum of the
    /// current timestamp and the total duration. The stream is funded by the funder and wrapped in an NFT.
    ///
    /// Notes:
    /// - Refer to the notes in [`create_with_timestamps`].
    ///
    /// Accounts expected:
    /// - Refer to the accounts in [`create_with_timestamps`].
    ///
    /// Parameters:
    /// - `salt` A unique salt used to derive the address of the stream NFT mint.
    /// - `deposit_amount` The deposit amount, denoted in units of the token's decimals.
    /// - `cliff_duration` The cliff duration in seconds. Zero means no cliff.
    /// - `total_duration` The total duration in seconds.
    /// - `start_unlock_amount` The amount to be unlocked at the start time.
    /// - `cliff_unlock_amount` The amount to be unlocked at the cliff time.
    /// - `is_cancelable` Indicates if the stream is cancelable.
    ///
    /// Requirements:
    /// - Refer to the requirements in [`create_with_timestamps`].
    /// - The computed cliff and end times must not overflow.
    #[allow(clippy::too_many_arguments)]
    pub fn create_with_durations(
        bank: &mut Bank,
        accounts: CreateWithTimestamps,
        salt: u128,
        deposit_amount: u64,
        cliff_duration: i64,
        total_duration: i64,
        start_unlock_amount: u64,
        cliff_unlock_amount: u64,
        is_cancelable: bool,
    ) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.funder], |ctx| {
            instructions::create_with_durations::handler(
                ctx,
                &accounts,
                salt,
                deposit_amount,
                cliff_duration,
                total_duration,
                start_unlock_amount,
                cliff_unlock_amount,
                is_cancelable,
            )
        })
    }

    /// Creates a stream with the provided start time and end time. The stream is funded by the funder and wrapped
    /// in an NFT.
    ///
    /// Notes:
    /// - The passed sender of the stream doesn't have to be the same as its funder.
    /// - A cliff time of zero means there is no cliff.
    /// - As long as the times are ordered, it is not an error for the start or the cliff time to be in the past.
    /// - Emits a {CreateLockupStream} event.
    ///
    /// Accounts expected:
    /// - `funder` The account funding the stream, and the transaction signer.
    /// - `recipient` The address receiving the tokens, as well as the NFT owner.
    /// - `sender` The account that will be able to cancel and renounce the stream.
    /// - `deposit_token_mint` The mint of the deposited token.
    /// - `deposit_token_program` The Token Program of the deposited token.
    /// - `nft_token_program` The Token Program of the NFT.
    ///
    /// Parameters:
    /// - `salt` A unique salt used to derive the address of the stream NFT mint.
    /// - `deposit_amount` The deposit amount, denoted in units of the token's decimals.
    /// - `start_time` The Unix timestamp indicating the stream's start.
    /// - `cliff_time` The Unix timestamp indicating the stream's cliff.
    /// - `end_time` The Unix timestamp indicating the stream's end.
    /// - `start_unlock_amount` The amount to be unlocked at the start time.
    /// - `cliff_unlock_amount` The amount to be unlocked at the cliff time.
    /// - `is_cancelable` Indicates if the stream is cancelable.
    ///
    /// Requirements:
    /// - The program must have been initialized.
    /// - `deposit_amount` must be greater than zero.
    /// - `start_time` must be greater than zero and less than `end_time`.
    /// - If set, `cliff_time` must be greater than `start_time` and less than `end_time`.
    /// - If `cliff_time` is not set, the `cliff_unlock_amount` must be zero.
    /// - The sum of `start_unlock_amount` and `cliff_unlock_amount` must be less than or equal to deposit amount.
    /// - No stream must exist for the same `sender` and `salt`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_with_timestamps(
        bank: &mut Bank,
        accounts: CreateWithTimestamps,
        salt: u128,
        deposit_amount: u64,
        start_time: i64,
        cliff_time: i64,
        end_time: i64,
        start_unlock_amount: u64,
        cliff_unlock_amount: u64,
        is_cancelable: bool,
    ) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.funder], |ctx| {
            instructions::create_with_timestamps::handler(
                ctx,
                &accounts,
                salt,
                deposit_amount,
                start_time,
                cliff_time,
                end_time,
                start_unlock_amount,
                cliff_unlock_amount,
                is_cancelable,
            )
        })
    }

    /// Initializes the program with the provided fee collector address by creating the treasury and the NFT
    /// collection.
    ///
    /// Accounts expected:
    /// - `initializer` The transaction signer.
    /// - `nft_token_program` The Token Program of the NFT collection.
    ///
    /// Parameters:
    /// - `fee_collector` The address that will have the authority to collect fees.
    ///
    /// Requirements:
    /// - The program must not have been initialized already.
    pub fn initialize(bank: &mut Bank, accounts: Initialize, fee_collector: Pubkey) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.initializer], |ctx| {
            instructions::initialize::handler(ctx, &accounts, fee_collector)
        })
    }

    /// Removes the right of the stream's sender to cancel the stream.
    ///
    /// Notes:
    /// - Emits a {RenounceLockupStream} event.
    ///
    /// Accounts expected:
    /// - `sender` The transaction signer and the stream's sender.
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    ///
    /// Requirements:
    /// - The signer must be the stream's sender.
    /// - The stream must be cancelable, and neither settled, canceled nor depleted.
    pub fn renounce(bank: &mut Bank, accounts: Renounce) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.sender], |ctx| instructions::renounce::handler(ctx, &accounts))
    }

    /// Withdraws the provided amount of tokens from the stream data ATA to the provided withdrawal recipient ATA.
    ///
    /// Notes:
    /// - If the withdrawal recipient's ATA doesn't exist, it is created, with the signer paying for it.
    /// - The signer pays the withdrawal fee to the treasury.
    /// - Emits a {WithdrawFromLockupStream} event.
    ///
    /// Accounts expected:
    /// - `signer` The transaction signer.
    /// - `stream_recipient` The holder of the stream NFT.
    /// - `withdrawal_recipient` The address of the recipient receiving the withdrawn tokens.
    /// - `deposited_token_mint` The mint of the deposited token.
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    /// - `deposited_token_program` The Token Program of the deposited token.
    /// - `nft_token_program` The Token Program of the NFT.
    ///
    /// Parameters:
    /// - `amount` The amount to withdraw, denoted in units of the token's decimals.
    ///
    /// Requirements:
    /// - `stream_recipient` must hold the stream NFT.
    /// - `withdrawal_recipient` must be the stream recipient, unless the signer is the stream recipient.
    /// - The stream must not be depleted.
    /// - `amount` must be greater than zero and must not exceed the withdrawable amount.
    pub fn withdraw(bank: &mut Bank, accounts: Withdraw, amount: u64) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.signer], |ctx| instructions::withdraw::handler(ctx, &accounts, amount))
    }

    /// Withdraws the maximum withdrawable amount from the stream data ATA to the provided withdrawal recipient ATA.
    ///
    /// Notes:
    /// - Refer to the notes in [`withdraw`].
    ///
    /// Accounts expected:
    /// - Refer to the accounts in [`withdraw`].
    ///
    /// Requirements:
    /// - Refer to the requirements in [`withdraw`].
    pub fn withdraw_max(bank: &mut Bank, accounts: Withdraw) -> Result<()> {
        bank.process_transaction(&ID, &[accounts.signer], |ctx| instructions::withdraw_max::handler(ctx, &accounts))
    }

    ////////////////////////////////////////////////////////////////////////////
    //                              READ-ONLY IXS                             //
    ////////////////////////////////////////////////////////////////////////////

    /// Calculates the amount that the sender would be refunded if the stream were canceled, denoted in units of the
    /// token's decimals.
    ///
    /// Accounts expected:
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    pub fn refundable_amount_of(bank: &Bank, accounts: StreamView) -> Result<u64> {
        bank.simulate_transaction(&ID, |ctx| instructions::refundable_amount_of::handler(ctx, &accounts))
    }

    /// Retrieves the stream's status.
    ///
    /// Accounts expected:
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    pub fn status_of(bank: &Bank, accounts: StreamView) -> Result<StreamStatus> {
        bank.simulate_transaction(&ID, |ctx| instructions::status_of::handler(ctx, &accounts))
    }

    /// Calculates the amount streamed to the recipient, denoted in units of the token's decimals.
    ///
    /// Accounts expected:
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    pub fn streamed_amount_of(bank: &Bank, accounts: StreamView) -> Result<u64> {
        bank.simulate_transaction(&ID, |ctx| instructions::streamed_amount_of::handler(ctx, &accounts))
    }

    /// Returns a flag indicating whether a stream NFT mint exists for the given sender and salt.
    ///
    /// Parameters:
    /// - `sender` The sender of the stream.
    /// - `salt` The unique salt used to derive the address of the stream NFT mint.
    pub fn stream_exists(bank: &Bank, sender: Pubkey, salt: u128) -> Result<bool> {
        bank.simulate_transaction(&ID, |ctx| instructions::stream_exists::handler(ctx, sender, salt))
    }

    /// Returns the stream data.
    ///
    /// Accounts expected:
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    pub fn stream_view(bank: &Bank, accounts: StreamView) -> Result<StreamData> {
        bank.simulate_transaction(&ID, |ctx| instructions::stream_view::handler(ctx, &accounts))
    }

    /// Returns the treasury details.
    pub fn treasury_view(bank: &Bank) -> Result<Treasury> {
        bank.simulate_transaction(&ID, |ctx| instructions::treasury_view::handler(ctx))
    }

    /// Calculates the amount available for the recipient to withdraw, denoted in units of the token's decimals.
    ///
    /// Accounts expected:
    /// - `stream_nft_mint` The stream NFT mint uniquely identifying the stream.
    pub fn withdrawable_amount_of(bank: &Bank, accounts: StreamView) -> Result<u64> {
        bank.simulate_transaction(&ID, |ctx| instructions::withdrawable_amount_of::handler(ctx, &accounts))
    }

    /// Returns the withdrawal fee in lamports.
    pub fn withdrawal_fee_in_lamports(bank: &Bank) -> Result<u64> {
        bank.simulate_transaction(&ID, |ctx| instructions::withdrawal_fee_in_lamports::handler(ctx))
    }
}
