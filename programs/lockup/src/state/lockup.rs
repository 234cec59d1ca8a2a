use anchor_lang::{prelude::*, AnchorDeserialize, AnchorSerialize};

/// Groups the amounts of a Lockup stream. The invariant `withdrawn + refunded <= deposited` holds at all times.
#[derive(Clone, Debug, Default, PartialEq, Eq, InitSpace, AnchorSerialize, AnchorDeserialize)]
pub struct Amounts {
    pub cliff_unlock: u64,
    pub deposited: u64,
    pub refunded: u64,
    pub start_unlock: u64,
    pub withdrawn: u64,
}

#[account]
#[derive(Debug, Default, PartialEq, Eq, InitSpace)]
pub struct StreamData {
    pub amounts: Amounts,
    pub deposited_token_mint: Pubkey,
    pub bump: u8,
    pub salt: u128,
    pub is_cancelable: bool,
    pub is_depleted: bool,
    pub stream_nft_mint: Pubkey,
    pub timestamps: Timestamps,
    pub sender: Pubkey,
    pub was_canceled: bool,
}

/// Groups the timestamps for a Lockup stream.
///
/// All fields use `i64`, instead of a unsigned integer, to match Solana’s `Clock` struct, which returns
/// timestamps as `i64`. A cliff of zero means the stream has no cliff.
#[derive(Clone, Debug, Default, PartialEq, Eq, InitSpace, AnchorSerialize, AnchorDeserialize)]
pub struct Timestamps {
    pub cliff: i64,
    pub end: i64,
    pub start: i64,
}

impl StreamData {
    /// State update for the [`fn@crate::sablier_lockup::cancel`] instruction.
    pub fn cancel(&mut self, sender_amount: u64, recipient_amount: u64) -> Result<()> {
        self.amounts.refunded =
            self.amounts.refunded.checked_add(sender_amount).ok_or(ProgramError::ArithmeticOverflow)?;
        self.is_cancelable = false;
        self.was_canceled = true;

        // Mark the stream as depleted if nothing is left for the recipient to withdraw.
        if recipient_amount == 0 {
            self.is_depleted = true;
        }

        Ok(())
    }

    /// State update for the [`fn@crate::sablier_lockup::create_with_timestamps`] instruction.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        deposited_token_mint: Pubkey,
        bump: u8,
        cliff_time: i64,
        cliff_unlock_amount: u64,
        deposit_amount: u64,
        end_time: i64,
        salt: u128,
        is_cancelable: bool,
        sender: Pubkey,
        start_time: i64,
        start_unlock_amount: u64,
        stream_nft_mint: Pubkey,
    ) -> Result<()> {
        self.bump = bump;
        self.amounts = Amounts {
            cliff_unlock: cliff_unlock_amount,
            deposited: deposit_amount,
            refunded: 0,
            start_unlock: start_unlock_amount,
            withdrawn: 0,
        };
        self.deposited_token_mint = deposited_token_mint;
        self.is_cancelable = is_cancelable;
        self.is_depleted = false;
        self.salt = salt;
        self.sender = sender;
        self.stream_nft_mint = stream_nft_mint;
        self.timestamps = Timestamps {
            cliff: cliff_time,
            end: end_time,
            start: start_time,
        };
        self.was_canceled = false;

        Ok(())
    }

    /// State update for the [`fn@crate::sablier_lockup::renounce`] instruction.
    pub fn renounce(&mut self) -> Result<()> {
        self.is_cancelable = false;

        Ok(())
    }

    /// State update for the [`fn@crate::sablier_lockup::withdraw`] instruction.
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        self.amounts.withdrawn =
            self.amounts.withdrawn.checked_add(amount).ok_or(ProgramError::ArithmeticOverflow)?;

        // Mark the Stream as non-cancelable if it has been depleted
        //
        // Note: the `>=` operator is used as an extra safety measure for the case when the withdrawn amount is bigger
        // than expected, for one reason or the other
        if self.amounts.withdrawn >= self.amounts.deposited.saturating_sub(self.amounts.refunded) {
            self.is_cancelable = false;
            self.is_depleted = true;
        }

        Ok(())
    }
}

/// The status of a Lockup stream, derived from its state and the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum StreamStatus {
    Pending,
    Streaming,
    Settled,
    Canceled,
    Depleted,
}

impl StreamStatus {
    /// Settled, canceled and depleted streams are cold: their streamed amount can no longer change, except for a
    /// withdrawal.
    pub fn is_cold(self) -> bool {
        matches!(self, StreamStatus::Settled | StreamStatus::Canceled | StreamStatus::Depleted)
    }
}
