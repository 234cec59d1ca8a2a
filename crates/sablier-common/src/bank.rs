//! In-process model of the host runtime: an account ledger with lamport balances, the clock and the rent sysvar.
//!
//! Every instruction is executed through [`Bank::process_transaction`], which hands the handler an
//! [`InvokeContext`] and rolls back every account touched by the handler when it returns an error.

use std::collections::BTreeMap;

use anchor_lang::{
    error::ErrorCode as AnchorErrorCode, prelude::*, solana_program::rent::Rent, system_program, AccountDeserialize,
    AccountSerialize, Owner,
};

use crate::token_transfer::{MintState, TokenAccountState, MINT_LEN, TOKEN_ACCOUNT_LEN};

// -------------------------------------------------------------------------- //
//                                  ACCOUNTS                                  //
// -------------------------------------------------------------------------- //

/// The data held by an account, typed by the program that owns it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AccountData {
    #[default]
    Empty,
    Mint(MintState),
    Token(TokenAccountState),
    /// Serialized Anchor account: discriminator followed by the Borsh-encoded fields.
    Program(Vec<u8>),
}

impl AccountData {
    /// The length of the account data, in bytes.
    pub fn data_len(&self) -> usize {
        match self {
            AccountData::Empty => 0,
            AccountData::Mint(_) => MINT_LEN,
            AccountData::Token(_) => TOKEN_ACCOUNT_LEN,
            AccountData::Program(data) => data.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerAccount {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: AccountData,
}

impl LedgerAccount {
    fn system(lamports: u64) -> Self {
        Self {
            lamports,
            owner: system_program::ID,
            data: AccountData::Empty,
        }
    }

    fn is_initialized(&self) -> bool {
        self.data != AccountData::Empty || self.owner != system_program::ID
    }
}

// -------------------------------------------------------------------------- //
//                                    BANK                                    //
// -------------------------------------------------------------------------- //

#[derive(Clone, Debug)]
pub struct Bank {
    accounts: BTreeMap<Pubkey, LedgerAccount>,
    rent: Rent,
    unix_timestamp: i64,
}

impl Bank {
    pub fn new(unix_timestamp: i64) -> Self {
        Self {
            accounts: BTreeMap::new(),
            rent: Rent::default(),
            unix_timestamp,
        }
    }

    /// Returns the current Unix timestamp of the clock.
    pub fn unix_timestamp(&self) -> i64 {
        self.unix_timestamp
    }

    /// Moves the clock to the given Unix timestamp.
    pub fn warp_to_timestamp(&mut self, unix_timestamp: i64) {
        self.unix_timestamp = unix_timestamp;
    }

    pub fn rent(&self) -> &Rent {
        &self.rent
    }

    /// Credits lamports to an address, creating a system account if it doesn't exist yet.
    pub fn airdrop(&mut self, address: &Pubkey, lamports: u64) {
        let account = self.accounts.entry(*address).or_insert_with(|| LedgerAccount::system(0));
        account.lamports = account.lamports.saturating_add(lamports);
    }

    pub fn get_account(&self, address: &Pubkey) -> Option<&LedgerAccount> {
        self.accounts.get(address)
    }

    /// An account exists if it holds lamports or data.
    /// Whether `address` holds an allocated or program-owned account. A bare lamport balance doesn't count.
    pub fn account_exists(&self, address: &Pubkey) -> bool {
        self.accounts.get(address).is_some_and(LedgerAccount::is_initialized)
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.accounts.get(address).map_or(0, |account| account.lamports)
    }

    /// Deserializes the Anchor account stored at `address`, if any.
    pub fn get_program_account<T: AccountDeserialize>(&self, address: &Pubkey) -> Option<T> {
        match &self.accounts.get(address)?.data {
            AccountData::Program(data) => T::try_deserialize(&mut data.as_slice()).ok(),
            _ => None,
        }
    }

    /// Executes a single instruction atomically on behalf of `program_id`, with `signers` as the transaction's
    /// declared signer set. If the instruction fails, every account is restored to its pre-transaction state.
    pub fn process_transaction<T, F>(&mut self, program_id: &Pubkey, signers: &[Pubkey], instruction: F) -> Result<T>
    where
        F: FnOnce(&mut InvokeContext<'_>) -> Result<T>,
    {
        let snapshot = self.accounts.clone();
        let unix_timestamp = self.unix_timestamp;

        let result = instruction(&mut InvokeContext {
            bank: self,
            program_id: *program_id,
            signers,
            unix_timestamp,
        });

        if result.is_err() {
            self.accounts = snapshot;
        }

        result
    }

    /// Executes an instruction against a fork of the bank, discarding any state changes. Used for the read-only
    /// instructions.
    pub fn simulate_transaction<T, F>(&self, program_id: &Pubkey, instruction: F) -> Result<T>
    where
        F: FnOnce(&mut InvokeContext<'_>) -> Result<T>,
    {
        self.clone().process_transaction(program_id, &[], instruction)
    }
}

// -------------------------------------------------------------------------- //
//                               INVOKE CONTEXT                               //
// -------------------------------------------------------------------------- //

/// The view of the bank available to an executing instruction.
///
/// The clock is read once when the transaction starts, so every time-dependent branch of an instruction observes
/// the same timestamp.
pub struct InvokeContext<'a> {
    pub(crate) bank: &'a mut Bank,
    program_id: Pubkey,
    signers: &'a [Pubkey],
    unix_timestamp: i64,
}

impl InvokeContext<'_> {
    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Returns the Unix timestamp of the clock at the start of the transaction.
    pub fn unix_timestamp(&self) -> i64 {
        self.unix_timestamp
    }

    pub fn rent(&self) -> &Rent {
        &self.bank.rent
    }

    pub fn is_signer(&self, address: &Pubkey) -> bool {
        self.signers.contains(address)
    }

    pub fn require_signer(&self, address: &Pubkey) -> Result<()> {
        if !self.is_signer(address) {
            return Err(AnchorErrorCode::AccountNotSigner.into());
        }

        Ok(())
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.bank.lamports(address)
    }

    pub fn data_len(&self, address: &Pubkey) -> usize {
        self.bank.accounts.get(address).map_or(0, |account| account.data.data_len())
    }

    /// Loads and deserializes an Anchor account, checking that it exists and is owned by the expected program.
    pub fn load<T: AccountDeserialize + Owner>(&self, address: &Pubkey) -> Result<T> {
        let account = self
            .bank
            .accounts
            .get(address)
            .filter(|account| account.is_initialized())
            .ok_or(AnchorErrorCode::AccountNotInitialized)?;

        if account.owner != T::owner() {
            return Err(AnchorErrorCode::AccountOwnedByWrongProgram.into());
        }

        match &account.data {
            AccountData::Program(data) => T::try_deserialize(&mut data.as_slice()),
            _ => Err(AnchorErrorCode::AccountDidNotDeserialize.into()),
        }
    }

    /// Creates an Anchor account of `space` bytes at `address`, funded to rent exemption by `payer`.
    pub fn init<T: AccountSerialize + Owner>(
        &mut self,
        payer: &Pubkey,
        address: &Pubkey,
        space: usize,
        value: &T,
    ) -> Result<()> {
        let mut data = Vec::with_capacity(space);
        value.try_serialize(&mut data)?;
        if data.len() > space {
            return Err(AnchorErrorCode::AccountDidNotSerialize.into());
        }
        data.resize(space, 0);

        self.create_account(payer, address, &T::owner(), AccountData::Program(data))
    }

    /// Writes an Anchor account back to the ledger. Only the owning program may write to an account.
    pub fn store<T: AccountSerialize + Owner>(&mut self, address: &Pubkey, value: &T) -> Result<()> {
        let program_id = self.program_id;
        let account = self
            .bank
            .accounts
            .get_mut(address)
            .filter(|account| account.is_initialized())
            .ok_or(AnchorErrorCode::AccountNotInitialized)?;

        if account.owner != T::owner() || account.owner != program_id {
            return Err(AnchorErrorCode::AccountOwnedByWrongProgram.into());
        }

        let AccountData::Program(buffer) = &mut account.data else {
            return Err(AnchorErrorCode::AccountDidNotSerialize.into());
        };

        let mut data = Vec::with_capacity(buffer.len());
        value.try_serialize(&mut data)?;
        if data.len() > buffer.len() {
            return Err(AnchorErrorCode::AccountDidNotSerialize.into());
        }
        buffer[..data.len()].copy_from_slice(&data);

        Ok(())
    }

    /// System transfer of lamports from a signer to any address.
    pub fn transfer_lamports(&mut self, from: &Pubkey, to: &Pubkey, lamports: u64) -> Result<()> {
        if !self.is_signer(from) {
            return Err(ProgramError::MissingRequiredSignature.into());
        }
        if lamports == 0 {
            return Ok(());
        }

        let source = self.bank.accounts.get_mut(from).ok_or(ProgramError::InsufficientFunds)?;
        source.lamports = source.lamports.checked_sub(lamports).ok_or(ProgramError::InsufficientFunds)?;

        self.credit(to, lamports)
    }

    /// Debits lamports from an account owned by the executing program.
    pub fn sub_lamports(&mut self, address: &Pubkey, lamports: u64) -> Result<()> {
        let program_id = self.program_id;
        let account = self.bank.accounts.get_mut(address).ok_or(AnchorErrorCode::AccountNotInitialized)?;

        if account.owner != program_id {
            return Err(AnchorErrorCode::AccountOwnedByWrongProgram.into());
        }

        account.lamports = account.lamports.checked_sub(lamports).ok_or(ProgramError::ArithmeticOverflow)?;

        Ok(())
    }

    /// Credits lamports to any account.
    pub fn add_lamports(&mut self, address: &Pubkey, lamports: u64) -> Result<()> {
        self.credit(address, lamports)
    }

    fn credit(&mut self, address: &Pubkey, lamports: u64) -> Result<()> {
        let account = self.bank.accounts.entry(*address).or_insert_with(|| LedgerAccount::system(0));
        account.lamports = account.lamports.checked_add(lamports).ok_or(ProgramError::ArithmeticOverflow)?;

        Ok(())
    }

    /// Allocates an account, assigns it to `owner` and tops its balance up to the rent-exempt minimum.
    pub(crate) fn create_account(
        &mut self,
        payer: &Pubkey,
        address: &Pubkey,
        owner: &Pubkey,
        data: AccountData,
    ) -> Result<()> {
        if self.bank.accounts.get(address).is_some_and(LedgerAccount::is_initialized) {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }

        let rent_exempt_minimum = self.bank.rent.minimum_balance(data.data_len());
        let top_up = rent_exempt_minimum.saturating_sub(self.lamports(address));
        self.transfer_lamports(payer, address, top_up)?;

        let account = self.bank.accounts.entry(*address).or_insert_with(|| LedgerAccount::system(0));
        account.owner = *owner;
        account.data = data;

        Ok(())
    }

    pub(crate) fn account_mut(&mut self, address: &Pubkey) -> Option<&mut LedgerAccount> {
        self.bank.accounts.get_mut(address)
    }

    pub(crate) fn account(&self, address: &Pubkey) -> Option<&LedgerAccount> {
        self.bank.accounts.get(address)
    }
}

// -------------------------------------------------------------------------- //
//                                    TESTS                                   //
// -------------------------------------------------------------------------- //
