#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_spl::{token, token_2022};
use sablier_common::{get_ata_address, Bank};
use sablier_lockup::sablier_lockup as lockup;
use sablier_lockup::{
    instructions::{Cancel, CollectFees, CreateWithTimestamps, Initialize, Renounce, StreamView, Withdraw},
    state::lockup::StreamData,
    utils::pda::{find_nft_collection_mint_address, find_stream_data_address, find_stream_nft_mint_address, find_treasury_address},
};

// -------------------------------------------------------------------------- //
//                                  CONSTANTS                                 //
// -------------------------------------------------------------------------- //

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// The genesis time of the test bank and the start time of the default stream.
pub const NOW: i64 = 1_754_142_441;

pub const DEPOSIT_AMOUNT: u64 = 100_000_000; // 100e6 units
pub const TOTAL_DURATION: i64 = 100;
pub const START_UNLOCK_AMOUNT: u64 = 0;
pub const CLIFF_UNLOCK_AMOUNT: u64 = 0;

pub const TOKEN_DECIMALS: u8 = 6;
pub const INITIAL_TOKEN_BALANCE: u64 = 1_000_000_000_000;

/// The schedule of a stream: start, cliff and end times, plus the start and cliff unlock amounts.
#[derive(Clone, Copy, Debug)]
pub struct Schedule {
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub start_unlock_amount: u64,
    pub cliff_unlock_amount: u64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start_time: NOW,
            cliff_time: 0,
            end_time: NOW + TOTAL_DURATION,
            start_unlock_amount: START_UNLOCK_AMOUNT,
            cliff_unlock_amount: CLIFF_UNLOCK_AMOUNT,
        }
    }
}

/// A token mint together with the program that owns it.
#[derive(Clone, Copy, Debug)]
pub struct TestToken {
    pub mint: Pubkey,
    pub program: Pubkey,
}

// -------------------------------------------------------------------------- //
//                                  FIXTURE                                   //
// -------------------------------------------------------------------------- //

pub struct LockupTest {
    pub bank: Bank,
    pub admin: Pubkey,
    pub fee_collector: Pubkey,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub eve: Pubkey,
    /// SPL Token mint.
    pub usdc: TestToken,
    /// Token-2022 mint.
    pub dai: TestToken,
    next_salt: u128,
}

impl LockupTest {
    /// Sets up the actors and the tokens, without initializing the program.
    pub fn uninitialized() -> Self {
        let mut bank = Bank::new(NOW);

        let admin = Pubkey::new_unique();
        let fee_collector = Pubkey::new_unique();
        let sender = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let eve = Pubkey::new_unique();
        for user in [admin, fee_collector, sender, recipient, eve] {
            bank.airdrop(&user, 100 * LAMPORTS_PER_SOL);
        }

        let usdc = create_token(&mut bank, &admin, token::ID);
        let dai = create_token(&mut bank, &admin, token_2022::ID);
        for token in [usdc, dai] {
            bank.mint_tokens(&admin, &token.mint, &sender, INITIAL_TOKEN_BALANCE, &token.program).unwrap();
        }

        Self {
            bank,
            admin,
            fee_collector,
            sender,
            recipient,
            eve,
            usdc,
            dai,
            next_salt: 0,
        }
    }

    /// Sets up the actors and the tokens, and initializes the program.
    pub fn new() -> Self {
        let mut test = Self::uninitialized();
        test.initialize().unwrap();
        test
    }

    pub fn initialize(&mut self) -> Result<()> {
        let accounts = Initialize {
            initializer: self.admin,
            nft_token_program: token::ID,
        };
        lockup::initialize(&mut self.bank, accounts, self.fee_collector)
    }

    // ---------------------------------------------------------------------- //
    //                                 CLOCK                                  //
    // ---------------------------------------------------------------------- //

    /// Moves the clock to `NOW + offset`.
    pub fn warp(&mut self, offset: i64) {
        self.bank.warp_to_timestamp(NOW + offset);
    }

    // ---------------------------------------------------------------------- //
    //                                ACCOUNTS                                //
    // ---------------------------------------------------------------------- //

    pub fn create_accounts(&self, token: TestToken) -> CreateWithTimestamps {
        CreateWithTimestamps {
            funder: self.sender,
            recipient: self.recipient,
            sender: self.sender,
            deposit_token_mint: token.mint,
            deposit_token_program: token.program,
            nft_token_program: token::ID,
        }
    }

    pub fn cancel_accounts(&self, stream_nft_mint: Pubkey) -> Cancel {
        let stream_data = self.stream_data(&stream_nft_mint);
        Cancel {
            sender: self.sender,
            deposited_token_mint: stream_data.deposited_token_mint,
            stream_nft_mint,
            deposited_token_program: self.token_program_of(&stream_data.deposited_token_mint),
        }
    }

    pub fn renounce_accounts(&self, stream_nft_mint: Pubkey) -> Renounce {
        Renounce {
            sender: self.sender,
            stream_nft_mint,
        }
    }

    /// Accounts for a withdrawal signed by the recipient, to the recipient.
    pub fn withdraw_accounts(&self, stream_nft_mint: Pubkey) -> Withdraw {
        let stream_data = self.stream_data(&stream_nft_mint);
        Withdraw {
            signer: self.recipient,
            stream_recipient: self.recipient,
            withdrawal_recipient: self.recipient,
            deposited_token_mint: stream_data.deposited_token_mint,
            stream_nft_mint,
            deposited_token_program: self.token_program_of(&stream_data.deposited_token_mint),
            nft_token_program: token::ID,
        }
    }

    pub fn collect_fees_accounts(&self, fee_recipient: Pubkey) -> CollectFees {
        CollectFees {
            fee_collector: self.fee_collector,
            fee_recipient,
        }
    }

    pub fn stream_view(&self, stream_nft_mint: Pubkey) -> StreamView {
        StreamView {
            stream_nft_mint,
        }
    }

    // ---------------------------------------------------------------------- //
    //                           STREAM CREATION                              //
    // ---------------------------------------------------------------------- //

    pub fn next_salt(&mut self) -> u128 {
        let salt = self.next_salt;
        self.next_salt += 1;
        salt
    }

    /// Creates a cancelable USDC stream with the default schedule, returning its NFT mint.
    pub fn create_default_stream(&mut self) -> Pubkey {
        self.create_stream(self.usdc, Schedule::default(), true).unwrap()
    }

    pub fn create_stream(&mut self, token: TestToken, schedule: Schedule, is_cancelable: bool) -> Result<Pubkey> {
        let salt = self.next_salt();
        self.create_stream_with_salt(token, schedule, is_cancelable, salt)
    }

    pub fn create_stream_with_salt(
        &mut self,
        token: TestToken,
        schedule: Schedule,
        is_cancelable: bool,
        salt: u128,
    ) -> Result<Pubkey> {
        let accounts = self.create_accounts(token);
        lockup::create_with_timestamps(
            &mut self.bank,
            accounts,
            salt,
            DEPOSIT_AMOUNT,
            schedule.start_time,
            schedule.cliff_time,
            schedule.end_time,
            schedule.start_unlock_amount,
            schedule.cliff_unlock_amount,
            is_cancelable,
        )?;

        Ok(stream_nft_mint_of(&self.sender, salt))
    }

    // ---------------------------------------------------------------------- //
    //                             INSTRUCTIONS                               //
    // ---------------------------------------------------------------------- //

    pub fn cancel(&mut self, stream_nft_mint: Pubkey) -> Result<()> {
        let accounts = self.cancel_accounts(stream_nft_mint);
        lockup::cancel(&mut self.bank, accounts)
    }

    pub fn renounce(&mut self, stream_nft_mint: Pubkey) -> Result<()> {
        let accounts = self.renounce_accounts(stream_nft_mint);
        lockup::renounce(&mut self.bank, accounts)
    }

    /// Withdraws `amount` as the recipient, to the recipient.
    pub fn withdraw(&mut self, stream_nft_mint: Pubkey, amount: u64) -> Result<()> {
        let accounts = self.withdraw_accounts(stream_nft_mint);
        lockup::withdraw(&mut self.bank, accounts, amount)
    }

    pub fn withdraw_max(&mut self, stream_nft_mint: Pubkey) -> Result<()> {
        let accounts = self.withdraw_accounts(stream_nft_mint);
        lockup::withdraw_max(&mut self.bank, accounts)
    }

    // ---------------------------------------------------------------------- //
    //                                GETTERS                                 //
    // ---------------------------------------------------------------------- //

    pub fn stream_data(&self, stream_nft_mint: &Pubkey) -> StreamData {
        let (stream_data, _) = find_stream_data_address(stream_nft_mint);
        self.bank.get_program_account::<StreamData>(&stream_data).expect("stream data not found")
    }

    /// Token balance of the stream's escrow.
    pub fn stream_balance(&self, stream_nft_mint: &Pubkey) -> u64 {
        let (stream_data_address, _) = find_stream_data_address(stream_nft_mint);
        let mint = self.stream_data(stream_nft_mint).deposited_token_mint;
        self.token_balance(&stream_data_address, &mint)
    }

    pub fn token_balance(&self, owner: &Pubkey, mint: &Pubkey) -> u64 {
        let ata = get_ata_address(owner, mint, &self.token_program_of(mint));
        self.bank.token_balance(&ata)
    }

    pub fn nft_balance(&self, owner: &Pubkey, stream_nft_mint: &Pubkey) -> u64 {
        self.bank.token_balance(&get_ata_address(owner, stream_nft_mint, &token::ID))
    }

    pub fn treasury_lamports(&self) -> u64 {
        self.bank.lamports(&find_treasury_address().0)
    }

    pub fn token_program_of(&self, mint: &Pubkey) -> Pubkey {
        if *mint == self.dai.mint {
            token_2022::ID
        } else {
            token::ID
        }
    }
}

// -------------------------------------------------------------------------- //
//                                  HELPERS                                   //
// -------------------------------------------------------------------------- //

pub fn create_token(bank: &mut Bank, authority: &Pubkey, program: Pubkey) -> TestToken {
    let mint = Pubkey::new_unique();
    bank.create_mint(authority, &mint, authority, TOKEN_DECIMALS, &program).unwrap();
    TestToken {
        mint,
        program,
    }
}

pub fn stream_nft_mint_of(sender: &Pubkey, salt: u128) -> Pubkey {
    find_stream_nft_mint_address(sender, salt).0
}

pub fn nft_collection_mint() -> Pubkey {
    find_nft_collection_mint_address().0
}
